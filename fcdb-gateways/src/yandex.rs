use std::{thread, time::Duration};

use anyhow::anyhow;
use serde::Deserialize;

use fcdb_core::gateways::geocode::{GeoCodingGateway, GeocodeError};
use fcdb_entities::{address::Address, geo::Coordinate};

const YANDEX_API_URL: &str = "https://geocode-maps.yandex.ru/1.x/";

pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Response of the Yandex forward-geocoding API.
///
/// Every level is optional: a well-formed response that lacks any of the
/// nested members is a definitive "no match", not a protocol error.
#[derive(Debug, Deserialize)]
pub struct GeocoderResponse {
    response: Option<ResponseWrapper>,
}

#[derive(Debug, Deserialize)]
struct ResponseWrapper {
    #[serde(rename = "GeoObjectCollection")]
    collection: Option<GeoObjectCollection>,
}

#[derive(Debug, Deserialize)]
struct GeoObjectCollection {
    #[serde(rename = "featureMember", default)]
    members: Vec<FeatureMember>,
}

#[derive(Debug, Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: Option<GeoObject>,
}

#[derive(Debug, Deserialize)]
struct GeoObject {
    #[serde(rename = "Point")]
    point: Option<Point>,
}

#[derive(Debug, Deserialize)]
struct Point {
    pos: Option<String>,
}

/// Transport seam of the gateway. Implementations return the decoded
/// provider response or a transport error that is subject to retries.
pub trait FetchGeocoderResponse {
    fn fetch(&self, api_key: &str, address: &str) -> anyhow::Result<GeocoderResponse>;
}

#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl FetchGeocoderResponse for HttpFetcher {
    fn fetch(&self, api_key: &str, address: &str) -> anyhow::Result<GeocoderResponse> {
        let response = self
            .client
            .get(YANDEX_API_URL)
            .query(&[
                ("apikey", api_key),
                ("geocode", address),
                ("format", "json"),
            ])
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

/// Forward geocoder backed by the Yandex HTTP API.
///
/// Transport failures (timeouts, non-2xx, undecodable bodies) are retried
/// up to the configured budget with a fixed delay in between. A response
/// without a match is terminal and never retried.
#[derive(Debug)]
pub struct Yandex<F = HttpFetcher> {
    api_key: String,
    retries: u32,
    retry_delay: Duration,
    fetcher: F,
}

impl Yandex {
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        Ok(Self::with_fetcher(api_key, HttpFetcher::new()?))
    }
}

impl<F: FetchGeocoderResponse> Yandex<F> {
    pub fn with_fetcher(api_key: String, fetcher: F) -> Self {
        Self {
            api_key,
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            fetcher,
        }
    }

    pub fn with_retry_policy(mut self, retries: u32, retry_delay: Duration) -> Self {
        self.retries = retries;
        self.retry_delay = retry_delay;
        self
    }
}

impl<F: FetchGeocoderResponse> GeoCodingGateway for Yandex<F> {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Result<Coordinate, GeocodeError> {
        if addr.is_empty() {
            return Err(GeocodeError::InvalidAddress);
        }
        let attempts = self.retries.max(1);
        let mut last_err = None;
        for attempt in 1..=attempts {
            match self.fetcher.fetch(&self.api_key, addr.as_str()) {
                Ok(response) => {
                    return match position_from_response(&response) {
                        Some(pos) => {
                            log::debug!("Resolved address '{addr}': {pos:?}");
                            Ok(pos)
                        }
                        None => {
                            log::warn!("No coordinates found for address '{addr}'");
                            Err(GeocodeError::ResolutionFailed)
                        }
                    };
                }
                Err(err) => {
                    log::warn!(
                        "Geocoder request for '{addr}' failed (attempt {attempt}/{attempts}): {err}"
                    );
                    last_err = Some(err);
                    if attempt < attempts {
                        thread::sleep(self.retry_delay);
                    }
                }
            }
        }
        Err(GeocodeError::Provider(
            last_err.unwrap_or_else(|| anyhow!("no request attempted")),
        ))
    }
}

fn position_from_response(response: &GeocoderResponse) -> Option<Coordinate> {
    let pos = response
        .response
        .as_ref()?
        .collection
        .as_ref()?
        .members
        .first()?
        .geo_object
        .as_ref()?
        .point
        .as_ref()?
        .pos
        .as_deref()?;
    let mut parts = pos.split_whitespace();
    let lng: f64 = parts.next()?.parse().ok()?;
    let lat: f64 = parts.next()?.parse().ok()?;
    // The provider's native order is "longitude latitude"; this is the
    // single point where it is swapped to (latitude, longitude).
    Some(Coordinate::new(lat, lng))
}
