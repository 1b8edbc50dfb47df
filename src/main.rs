//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vivi::adapters::clock::SystemClock;
use vivi::adapters::files::FsContentReader;
use vivi::adapters::judge::{KeywordJudge, SeededJudge};
use vivi::adapters::notifier::ConsoleNotifier;
use vivi::adapters::report::{LogMailer, MarkdownReportStore, TerminalDisplay};
use vivi::adapters::speech::UnsupportedSpeech;
use vivi::adapters::ui::tui::TuiApp;
use vivi::domain::CHECKLIST;
use vivi::ports::{
    Clock, ContentReader, InputPort, ItemJudge, NotifierPort, ReportDisplay, ReportMailer,
    ReportStore, SpeechPort, SpeechSettings,
};
use vivi::shared::config::{AppConfig, JudgeKind};
use vivi::usecases::{
    ChatAssistant, ChatSettings, EvaluationService, ExtractionService, IntakeService,
    ReportService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // logs go to stderr so they do not interleave with the prompts
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    vivi::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    let reports_dir = PathBuf::from(cfg.reports_dir_or_default());
    info!(path = %reports_dir.display(), "reports directory");

    // --- Infrastructure ---
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let notifier: Arc<dyn NotifierPort> = Arc::new(ConsoleNotifier);
    let reader: Arc<dyn ContentReader> = Arc::new(FsContentReader);
    let speech: Arc<dyn SpeechPort> = Arc::new(UnsupportedSpeech);

    let judge: Arc<dyn ItemJudge> = match cfg.judge_kind() {
        JudgeKind::Keyword => {
            let min_satisfied = cfg.min_satisfied_or_default();
            info!(min_satisfied, "keyword judge");
            Arc::new(KeywordJudge::new(min_satisfied))
        }
        JudgeKind::Random => {
            let seed = cfg.judge_seed.unwrap_or_else(rand::random);
            warn!(seed, "random judge selected, results are not content-based");
            Arc::new(SeededJudge::new(seed))
        }
    };

    let store: Arc<dyn ReportStore> = Arc::new(MarkdownReportStore::new(&reports_dir));
    let mailer: Arc<dyn ReportMailer> = Arc::new(LogMailer::new(cfg.report_email.clone()));
    let display: Arc<dyn ReportDisplay> = Arc::new(TerminalDisplay);

    // --- Services ---
    let intake = IntakeService::new(Arc::clone(&notifier));
    let extraction = ExtractionService::new(
        reader,
        Arc::clone(&clock),
        Arc::clone(&notifier),
        cfg.extraction_delay(),
    );
    let evaluation = EvaluationService::new(
        judge,
        Arc::clone(&clock),
        Arc::clone(&notifier),
        CHECKLIST,
        cfg.section_delay(),
    );
    let reports = ReportService::new(store, mailer, display, Arc::clone(&notifier));

    let (reply_delay_min, reply_delay_max) = cfg.reply_delay_bounds();
    let rng = match cfg.judge_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let chat = ChatAssistant::new(
        Arc::clone(&clock),
        speech,
        Arc::clone(&notifier),
        rng,
        ChatSettings {
            reply_delay_min,
            reply_delay_max,
            dedup_window: cfg.dedup_window(),
            speech: SpeechSettings::default(),
        },
    );

    let input_port: Arc<dyn InputPort> = Arc::new(TuiApp::new(
        intake,
        extraction,
        evaluation,
        reports,
        chat,
        Arc::clone(&notifier),
    ));

    // --- Run (menu -> upload / evaluate / report / chat) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
