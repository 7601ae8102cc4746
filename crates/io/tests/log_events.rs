use std::fs;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use hydrosos_io::{discover_forecast_stations, read_daily_flow, read_forecast_ensemble};

/// Shared in-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Capture {
        self.clone()
    }
}

/// The readers emit progress events, so the verbosity filter targets
/// for the library crates are live.
#[test]
fn readers_emit_progress_events() {
    let dir = tempfile::tempdir().unwrap();

    let daily_dir = dir.path().join("daily");
    fs::create_dir(&daily_dir).unwrap();
    let daily = daily_dir.join("39001.csv");
    fs::write(&daily, "date,flow\n01/03/2020,1.5\n02/03/2020,2.5\n").unwrap();

    let fc_dir = dir.path().join("forecasts");
    fs::create_dir(&fc_dir).unwrap();
    fs::write(
        fc_dir.join("fc_01_39001.csv"),
        "Date,Discharge\n2024-04-01,1.0\n",
    )
    .unwrap();

    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(capture.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        read_daily_flow(&daily).unwrap();
        let stations = discover_forecast_stations(&fc_dir).unwrap();
        read_forecast_ensemble(&stations[0]).unwrap();
    });

    let log = capture.contents();
    assert!(log.contains("read daily records"), "missing read event:\n{log}");
    assert!(
        log.contains("discovered forecast stations"),
        "missing discovery event:\n{log}"
    );
    assert!(
        log.contains("read forecast member"),
        "missing member event:\n{log}"
    );
}
