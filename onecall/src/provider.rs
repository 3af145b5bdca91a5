// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::{FetchService, HttpFetcher},
  config::OneCallConfig,
  decode::decode,
  error::OneCallError,
  models::Response,
  options::Options,
};
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{info, instrument, warn};

/// Creates an observable report slot seeded with [`Response::empty`], for use
/// with [`Provider::bind_weather`].
pub fn binding() -> (watch::Sender<Response>, watch::Receiver<Response>) {
  watch::channel(Response::empty())
}

/// Fetches one call reports and hands them out in three shapes: awaited
/// ([`Provider::get_weather`]), through a completion callback
/// ([`Provider::get_weather_with`]) or written into a watch channel
/// ([`Provider::bind_weather`]). Each call performs exactly one fetch.
pub struct Provider<F = HttpFetcher> {
  fetcher: Arc<F>,
}

impl<F> Clone for Provider<F> {
  fn clone(&self) -> Self {
    Self {
      fetcher: Arc::clone(&self.fetcher),
    }
  }
}

impl Provider<HttpFetcher> {
  pub fn new(config: OneCallConfig) -> Result<Self, OneCallError> {
    Ok(Self::with_fetcher(HttpFetcher::new(config)?))
  }
}

impl<F: FetchService + 'static> Provider<F> {
  pub fn with_fetcher(fetcher: F) -> Self {
    Self {
      fetcher: Arc::new(fetcher),
    }
  }

  #[instrument(skip(self, options))]
  pub async fn fetch(&self, lat: f64, lon: f64, options: &Options) -> Result<Response, OneCallError> {
    let bytes = self.fetcher.fetch(lat, lon, options).await?;
    let response = decode(&bytes)?;
    info!("Fetched weather for {}", response.timezone);
    Ok(response)
  }

  /// Errors are logged and collapse to `None`.
  pub async fn get_weather(&self, lat: f64, lon: f64, options: &Options) -> Option<Response> {
    match self.fetch(lat, lon, options).await {
      Ok(response) => Some(response),
      Err(e) => {
        warn!("Failed to get weather for ({}, {}): {}", lat, lon, e);
        None
      }
    }
  }

  /// Runs the fetch on the tokio runtime and calls `completion` with the
  /// result from that task. Dropping the handle does not cancel the fetch.
  pub fn get_weather_with<C>(
    &self,
    lat: f64,
    lon: f64,
    options: Options,
    completion: C,
  ) -> JoinHandle<()>
  where
    C: FnOnce(Option<Response>) + Send + 'static,
  {
    let provider = self.clone();
    tokio::spawn(async move {
      let results = provider.get_weather(lat, lon, &options).await;
      completion(results);
    })
  }

  /// Writes a successful report into `binding`. On failure the slot keeps
  /// its previous value.
  pub fn bind_weather(
    &self,
    lat: f64,
    lon: f64,
    options: Options,
    binding: watch::Sender<Response>,
  ) -> JoinHandle<()> {
    self.get_weather_with(lat, lon, options, move |results| {
      if let Some(results) = results {
        binding.send_replace(results);
      }
    })
  }
}
