// ═══════════════════════════════════════════════════════════════════
// Engine Tests — fetch dispatch, state application, stale-response guard
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::runtime::Runtime;

use btc_dashboard::data::{ApiError, DashboardApi};
use btc_dashboard::domain::{HistoricPoint, HistoricSeries, KpiSummary, KpiValue, Month, Selection, Year};
use btc_dashboard::engine::worker::run_fetch;
use btc_dashboard::engine::{DashboardEngine, DashboardEvent, FetchCommand};
use btc_dashboard::models::{BarRange, DashboardView, KpiField};

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Backend
// ═══════════════════════════════════════════════════════════════════

#[derive(Clone)]
struct HistoricReply {
    delay: Duration,
    result: Result<Option<HistoricSeries>, ApiError>,
}

/// A scripted backend that records every request it receives.
struct MockApi {
    price: Result<f64, ApiError>,
    kpis: Result<Option<KpiSummary>, ApiError>,
    historic: HashMap<Selection, HistoricReply>,
    calls: Mutex<Vec<FetchCommand>>,
}

impl MockApi {
    fn new() -> Self {
        Self {
            price: Ok(28640.3312),
            kpis: Ok(Some(sample_kpis())),
            historic: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn with_historic(mut self, selection: Selection, delay_ms: u64, series: HistoricSeries) -> Self {
        self.historic.insert(
            selection,
            HistoricReply {
                delay: Duration::from_millis(delay_ms),
                result: Ok(Some(series)),
            },
        );
        self
    }

    fn calls(&self) -> Vec<FetchCommand> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, command: FetchCommand) {
        self.calls.lock().unwrap().push(command);
    }
}

#[async_trait]
impl DashboardApi for MockApi {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_price(&self) -> Result<f64, ApiError> {
        self.record(FetchCommand::Price);
        self.price.clone()
    }

    async fn fetch_kpis(&self) -> Result<Option<KpiSummary>, ApiError> {
        self.record(FetchCommand::Kpis);
        self.kpis.clone()
    }

    async fn fetch_historic(
        &self,
        selection: Selection,
    ) -> Result<Option<HistoricSeries>, ApiError> {
        self.record(FetchCommand::Historic(selection));
        match self.historic.get(&selection) {
            Some(reply) => {
                tokio::time::sleep(reply.delay).await;
                reply.result.clone()
            }
            None => Ok(None),
        }
    }
}

fn sample_kpis() -> KpiSummary {
    serde_json::from_str(
        r#"{"avg_price":16000.5,"max_price":69000,"min_price":3200,
            "volatility":1500.25,"max_two":25000,"min_two":18000}"#,
    )
    .unwrap()
}

fn sel(year: u16, month: Month) -> Selection {
    Selection::new(Year::new(year).unwrap(), month)
}

fn kpi(view: &DashboardView, field: KpiField) -> &str {
    view.kpi_lines
        .iter()
        .find(|line| line.field == field)
        .map(|line| line.value.as_str())
        .unwrap_or_default()
}

fn series(day_prices: &[(&str, f64)]) -> HistoricSeries {
    HistoricSeries::new(
        day_prices
            .iter()
            .map(|(day, price)| HistoricPoint {
                year: "2022".into(),
                month: "05".into(),
                day: day.to_string(),
                price: *price,
            })
            .collect(),
    )
}

fn engine_with(rt: &Runtime, api: Arc<MockApi>) -> DashboardEngine {
    DashboardEngine::new(api, rt.handle().clone(), Selection::default())
}

/// Pumps the engine the way the UI does until nothing is in flight.
fn wait_idle(engine: &mut DashboardEngine) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while engine.update() {
        assert!(Instant::now() < deadline, "fetches did not settle in time");
        std::thread::sleep(Duration::from_millis(5));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Mount
// ═══════════════════════════════════════════════════════════════════

#[test]
fn mount_fetches_everything_once_and_fills_the_view() {
    let rt = Runtime::new().unwrap();
    let api = Arc::new(MockApi::new().with_historic(
        Selection::default(),
        0,
        series(&[("01", 28500.12), ("02", 28700.00)]),
    ));
    let mut engine = engine_with(&rt, api.clone());

    engine.mount();
    engine.mount();
    assert_eq!(engine.dispatched_count(), 3);
    wait_idle(&mut engine);

    let calls = api.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.contains(&FetchCommand::Price));
    assert!(calls.contains(&FetchCommand::Kpis));
    assert!(calls.contains(&FetchCommand::Historic(Selection::default())));

    let view = DashboardView::from_state(engine.state());
    assert_eq!(kpi(&view, KpiField::CurrentPrice), "28640.33");
    assert_eq!(kpi(&view, KpiField::AveragePrice), "16000.5");
    assert_eq!(kpi(&view, KpiField::MaxPrice), "69000");
    assert_eq!(kpi(&view, KpiField::MinPrice), "3200");
    assert_eq!(kpi(&view, KpiField::Volatility), "1500.25");
    assert_eq!(
        view.bars,
        Some(BarRange {
            min: 18000.0,
            max: 25000.0
        })
    );

    let line = view.line.unwrap();
    let prices: Vec<f64> = line.points.iter().map(|p| p[1]).collect();
    assert_eq!(prices, vec![28500.12, 28700.00]);
}

#[test]
fn price_failure_leaves_price_blank() {
    let rt = Runtime::new().unwrap();
    let mut mock = MockApi::new();
    mock.price = Err(ApiError::Network("connection refused".into()));
    let mut engine = engine_with(&rt, Arc::new(mock));

    engine.mount();
    wait_idle(&mut engine);

    assert_eq!(engine.state().current_price, None);
    // The other fetchers are unaffected
    assert!(engine.state().kpis.avg_price.is_some());
}

#[test]
fn null_kpis_keep_every_field_blank() {
    let rt = Runtime::new().unwrap();
    let mut mock = MockApi::new();
    mock.kpis = Ok(None);
    let mut engine = engine_with(&rt, Arc::new(mock));

    engine.mount();
    wait_idle(&mut engine);

    let view = DashboardView::from_state(engine.state());
    assert_eq!(kpi(&view, KpiField::AveragePrice), "");
    assert_eq!(kpi(&view, KpiField::Volatility), "");
    assert!(view.bars.is_none());
}

#[test]
fn upstream_error_keeps_previous_historic_series() {
    let rt = Runtime::new().unwrap();
    let broken = sel(2019, Month::June);
    let mut mock = MockApi::new().with_historic(Selection::default(), 0, series(&[("01", 28500.0)]));
    mock.historic.insert(
        broken,
        HistoricReply {
            delay: Duration::ZERO,
            result: Err(ApiError::Upstream {
                endpoint: "/get-historic".into(),
                message: "An error occurred".into(),
            }),
        },
    );
    let mut engine = engine_with(&rt, Arc::new(mock));

    engine.mount();
    wait_idle(&mut engine);
    engine.select(broken);
    wait_idle(&mut engine);

    assert_eq!(engine.state().selection, broken);
    assert_eq!(engine.state().historic, Some(series(&[("01", 28500.0)])));
}

// ═══════════════════════════════════════════════════════════════════
// Selection
// ═══════════════════════════════════════════════════════════════════

#[test]
fn selection_change_issues_exactly_one_historic_request() {
    let rt = Runtime::new().unwrap();
    let api = Arc::new(MockApi::new());
    let mut engine = engine_with(&rt, api.clone());

    engine.mount();
    wait_idle(&mut engine);

    let target = sel(2016, Month::February);
    engine.select(target);
    engine.select(target);
    wait_idle(&mut engine);

    let historic_calls: Vec<FetchCommand> = api
        .calls()
        .into_iter()
        .filter(|c| matches!(c, FetchCommand::Historic(_)))
        .collect();
    assert_eq!(
        historic_calls,
        vec![
            FetchCommand::Historic(Selection::default()),
            FetchCommand::Historic(target)
        ]
    );
    assert_eq!(engine.dispatched_count(), 4);
}

#[test]
fn late_response_for_an_old_selection_is_dropped() {
    let rt = Runtime::new().unwrap();
    let newer = sel(2021, Month::November);
    let api = Arc::new(
        MockApi::new()
            .with_historic(Selection::default(), 300, series(&[("01", 28500.0)]))
            .with_historic(newer, 0, series(&[("01", 61000.0), ("02", 62000.0)])),
    );
    let mut engine = engine_with(&rt, api);

    engine.mount();
    engine.select(newer);
    assert_eq!(engine.in_flight_count(), 4);
    wait_idle(&mut engine);

    assert_eq!(engine.state().selection, newer);
    assert_eq!(
        engine.state().historic,
        Some(series(&[("01", 61000.0), ("02", 62000.0)]))
    );
}

#[test]
fn returning_to_a_selection_reproduces_the_same_state() {
    let rt = Runtime::new().unwrap();
    let other = sel(2018, Month::August);
    let api = Arc::new(
        MockApi::new()
            .with_historic(Selection::default(), 0, series(&[("01", 28500.0), ("02", 28600.0)]))
            .with_historic(other, 0, series(&[("01", 7000.0)])),
    );
    let mut engine = engine_with(&rt, api);

    engine.mount();
    wait_idle(&mut engine);
    let before = engine.state().clone();

    engine.select(other);
    wait_idle(&mut engine);
    engine.select(Selection::default());
    wait_idle(&mut engine);

    assert_eq!(engine.state(), &before);
}

// ═══════════════════════════════════════════════════════════════════
// Worker
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn worker_turns_errors_into_failure_events() {
    let mut mock = MockApi::new();
    mock.price = Err(ApiError::Status {
        endpoint: "/bitcoin-price".into(),
        status: 503,
    });

    let outcome = run_fetch(&mock, FetchCommand::Price).await;
    assert_eq!(outcome.command, FetchCommand::Price);
    assert_eq!(
        outcome.event,
        DashboardEvent::FetchFailed {
            command: FetchCommand::Price,
            error: ApiError::Status {
                endpoint: "/bitcoin-price".into(),
                status: 503
            }
        }
    );
}

#[tokio::test]
async fn worker_tags_historic_results_with_the_requested_selection() {
    let target = sel(2014, Month::April);
    let mock = MockApi::new().with_historic(target, 0, series(&[("01", 450.0)]));

    let outcome = run_fetch(&mock, FetchCommand::Historic(target)).await;
    assert_eq!(
        outcome.event,
        DashboardEvent::HistoricReceived {
            requested: target,
            series: Some(series(&[("01", 450.0)]))
        }
    );
}

#[test]
fn kpi_zero_bound_is_shown_in_the_view() {
    let mut state = btc_dashboard::engine::DashboardState::default();
    state.apply(DashboardEvent::KpisReceived(Some(KpiSummary {
        min_two: Some(KpiValue::from_text("0")),
        max_two: Some(KpiValue::from_text("25000")),
        ..Default::default()
    })));
    assert!(DashboardView::from_state(&state).bars.is_some());
}
