// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{config::OneCallConfig, error::OneCallError, options::Options};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use url::Url;

/// Transport that returns the raw one call document for a coordinate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchService: Send + Sync {
  async fn fetch(&self, lat: f64, lon: f64, options: &Options) -> Result<Vec<u8>, OneCallError>;
}

pub struct HttpFetcher {
  config: OneCallConfig,
  client: Client,
}

impl HttpFetcher {
  #[instrument(skip(config))]
  pub fn new(config: OneCallConfig) -> Result<Self, OneCallError> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { config, client })
  }

  pub(crate) fn build_url(&self, lat: f64, lon: f64, options: &Options) -> Result<Url, OneCallError> {
    let mut params = vec![
      ("lat", lat.to_string()),
      ("lon", lon.to_string()),
      ("appid", self.config.api_key.clone()),
    ];
    params.extend(options.query_pairs());

    Ok(Url::parse_with_params(&self.config.url, &params)?)
  }
}

#[async_trait]
impl FetchService for HttpFetcher {
  #[instrument(skip(self, options))]
  async fn fetch(&self, lat: f64, lon: f64, options: &Options) -> Result<Vec<u8>, OneCallError> {
    let url = self.build_url(lat, lon, options)?;
    let response = self.client.get(url).send().await?;

    match response.status() {
      reqwest::StatusCode::OK => (),
      reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(OneCallError::RateLimitExceeded),
      status => {
        error!("API request failed with status: {}", status);
        return Err(OneCallError::ApiError(format!(
          "API request failed with status: {}",
          status
        )));
      }
    }

    let body = response.bytes().await?;
    debug!("Received {} bytes", body.len());
    Ok(body.to_vec())
  }
}
