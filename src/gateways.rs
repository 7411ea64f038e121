use crate::cfg::Cfg;
use fcdb_core::{
    entities::{Address, Coordinate},
    gateways::geocode::{GeoCodingGateway, GeocodeError},
};
use fcdb_gateways::yandex::Yandex;

pub fn geocoding_gateway(cfg: &Cfg) -> anyhow::Result<GeoGw> {
    match &cfg.yandex_api_key {
        Some(api_key) => {
            log::info!("Use Yandex geocoding gateway");
            Ok(GeoGw::new(Yandex::new(api_key.clone())?))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            Ok(GeoGw::new(DummyGeoGw))
        }
    }
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn resolve_address_lat_lng(&self, _addr: &Address) -> Result<Coordinate, GeocodeError> {
        log::debug!("Cannot resolve addresses because no geocoding gateway was configured");
        Err(GeocodeError::ResolutionFailed)
    }
}

pub struct GeoGw(Box<dyn GeoCodingGateway + Send + Sync + 'static>);

impl GeoGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeoGw {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Result<Coordinate, GeocodeError> {
        self.0.resolve_address_lat_lng(addr)
    }
}
