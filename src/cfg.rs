use std::env;

const DEFAULT_DB_URL: &str = "foodcart.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub db_url: String,
    pub db_connection_pool_size: u32,
    pub yandex_api_key: Option<String>,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(db_url) = env::var("DATABASE_URL") {
            cfg.db_url = db_url;
        }
        match env::var("YANDEX_GEOCODER_API_KEY") {
            Ok(key) => {
                cfg.yandex_api_key = Some(key);
            }
            Err(_) => {
                log::warn!("No Yandex geocoder API key found");
            }
        };
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        let db_url = DEFAULT_DB_URL.to_string();
        let db_connection_pool_size = DB_CONNECTION_POOL_SIZE;
        let yandex_api_key = None;
        Self {
            db_url,
            db_connection_pool_size,
            yandex_api_key,
        }
    }
}
