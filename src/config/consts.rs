// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://fdm-apps.asu.edu/UFRM/FDS/FacilityData.aspx?bNum=";
pub const USER_AGENT: &str = concat!("facility_scrape/", env!("CARGO_PKG_VERSION"));

// Input
pub const DEFAULT_CODES_FILE: &str = "ASUfacilityNumbers.txt";

// Export
pub const DEFAULT_OUT_DIR: &str = "";
pub const DEFAULT_FILE: &str = "ASU_Facilities_Geo_Data";
pub const DEFAULT_SHEET_NAME: &str = "Sheet 1";

// Local state (GUI log)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
