// General constants for the Cabinet CM360 site
pub const BRAND_NAME: &str = "Cabinet CM360";
pub const BASE_URL: &str = "https://cabinetcm360.com";

// Contact
pub const CONTACT_EMAIL: &str = "info@cabinetcm360.com";
pub const CONTACT_PHONE: &str = "438-521-3151";
pub const CONTACT_ADDRESS: &str = "Montréal, Québec, Canada";
pub const TWITTER_HANDLE: &str = "@CabinetCM360";

// Locale and geography
pub const LOCALE: &str = "fr_FR";
pub const LANGUAGE: &str = "French";
pub const GEO_REGION: &str = "CA-QC";
pub const GEO_PLACENAME: &str = "Montréal";
pub const GEO_LATITUDE: &str = "45.5017";
pub const GEO_LONGITUDE: &str = "-73.5673";

// Default page metadata (home page)
pub const DEFAULT_TITLE: &str = "Cabinet CM360 – Expert en gestion de trésorerie pour entreprises";
pub const DEFAULT_DESCRIPTION: &str = "Cabinet de consultation spécialisé dans l'optimisation de la trésorerie, le cash management et les processus financiers. Accompagnement personnalisé pour améliorer votre gestion de liquidité.";
pub const DEFAULT_KEYWORDS: &str = "cabinet gestion trésorerie, cash management, processus financiers, consultation financière, optimisation liquidité, TMS, diagnostic trésorerie, gestion liquidité entreprise";
pub const DEFAULT_IMAGE: &str = "/og-image.jpg";
pub const DEFAULT_URL: &str = "/";

// Assets
pub const LOGO_PATH: &str = "/logo.png";
pub const HERO_VIDEO: &str = "/large.mp4";

// Navigation
pub const SCROLL_SOLID_THRESHOLD: f64 = 10.0; // px before the header turns solid
pub const ANCHOR_SCROLL_OFFSET: f64 = -100.0; // fixed header height
pub const MOBILE_SCROLL_DELAY_MS: u32 = 200; // wait for the menu to close

// Contact form
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1_000;
pub const SUBMIT_SUCCESS_MARKER: &str = "succès";
pub const SUBMIT_SUCCESS_TEXT: &str = "Message envoyé avec succès ! Nous vous contacterons bientôt.";
pub const SUBMIT_FAILURE_TEXT: &str = "Une erreur est survenue. Veuillez réessayer.";
