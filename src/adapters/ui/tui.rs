//! Implements InputPort. Inquire menu over the upload → evaluate → report flow,
//! plus the chat with Vivi.

use crate::adapters::files::uploaded_file_from_path;
use crate::adapters::ui::progress::TerminalProgress;
use crate::domain::{ChatMessage, DomainError, Notice, Sender, Step};
use crate::ports::{InputPort, NotifierPort};
use crate::usecases::report_presenter::{improvement_hint, present};
use crate::usecases::{
    ChatAssistant, EvaluationService, ExtractionService, IntakeService, ReportService, Session,
};
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::error::InquireError;
use inquire::ui::{RenderConfig, Styled};
use inquire::{Confirm, Select, Text};
use std::fmt;
use std::io::{Write, stdout};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

const VOICE_COMMAND: &str = "/voz";

/// Installs the neon prompt theme for every inquire prompt.
pub fn apply_theme() {
    let purple = inquire::ui::Color::Rgb {
        r: 0xbc,
        g: 0x13,
        b: 0xfe,
    };
    let green = inquire::ui::Color::Rgb {
        r: 0x0f,
        g: 0xf0,
        b: 0xfc,
    };
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("?").with_fg(purple))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(green));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddFiles,
    RemoveFile,
    BackToUpload,
    Extract,
    Evaluate,
    ViewReport,
    SaveReport,
    EmailReport,
    PresentReport,
    Chat,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 11] = [
        MenuAction::AddFiles,
        MenuAction::RemoveFile,
        MenuAction::BackToUpload,
        MenuAction::Extract,
        MenuAction::Evaluate,
        MenuAction::ViewReport,
        MenuAction::SaveReport,
        MenuAction::EmailReport,
        MenuAction::PresentReport,
        MenuAction::Chat,
        MenuAction::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::AddFiles => "📄 Adicionar arquivos",
            MenuAction::RemoveFile => "🗑  Remover arquivo",
            MenuAction::BackToUpload => "↩  Voltar ao envio de arquivos",
            MenuAction::Extract => "📥 Extrair conteúdo",
            MenuAction::Evaluate => "🔍 Avaliar projeto",
            MenuAction::ViewReport => "📊 Ver relatório",
            MenuAction::SaveReport => "💾 Salvar relatório",
            MenuAction::EmailReport => "✉  Enviar por email",
            MenuAction::PresentReport => "🖥  Projetar na tela",
            MenuAction::Chat => "💬 Conversar com a Vivi",
            MenuAction::Quit => "🚪 Sair",
        };
        f.write_str(label)
    }
}

/// Mutable state of the interactive session. One lock for all of it.
struct TuiState {
    session: Session,
    chat: ChatAssistant,
    /// Transcript messages already printed.
    printed: usize,
}

/// TUI adapter. Inquire prompts.
pub struct TuiApp {
    intake: IntakeService,
    extraction: ExtractionService,
    evaluation: EvaluationService,
    reports: ReportService,
    notifier: std::sync::Arc<dyn NotifierPort>,
    state: Mutex<TuiState>,
}

impl TuiApp {
    pub fn new(
        intake: IntakeService,
        extraction: ExtractionService,
        evaluation: EvaluationService,
        reports: ReportService,
        chat: ChatAssistant,
        notifier: std::sync::Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            intake,
            extraction,
            evaluation,
            reports,
            notifier,
            state: Mutex::new(TuiState {
                session: Session::new(),
                chat,
                printed: 0,
            }),
        }
    }

    async fn add_files(&self) -> Result<(), InquireError> {
        let raw = Text::new("Caminhos dos arquivos:")
            .with_help_message("PDF, TXT, XLS ou XLSX, separados por vírgula")
            .prompt()?;

        let mut batch = Vec::new();
        for path in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match uploaded_file_from_path(path).await {
                Ok(file) => batch.push(file),
                Err(e) => {
                    debug!(path, error = %e, "file not readable");
                    self.notifier.notify(&Notice::error(
                        "Arquivo não encontrado",
                        format!("{}: {}", path, e),
                    ));
                }
            }
        }
        if batch.is_empty() {
            return Ok(());
        }

        let mut state = self.state.lock().await;
        let report = self.intake.accept(&mut state.session, batch);
        if report.accepted > 0 {
            self.notifier.notify(&Notice::info(
                "Arquivos adicionados",
                format!("{} arquivo(s) na lista", state.session.files().len()),
            ));
        }
        Ok(())
    }

    async fn remove_file(&self) -> Result<(), InquireError> {
        let mut state = self.state.lock().await;
        if state.session.files().is_empty() {
            self.notifier.notify(&DomainError::NoFiles.notice());
            return Ok(());
        }
        let options: Vec<String> = state
            .session
            .files()
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{}. {} ({:.1} KB)", i + 1, f.name, f.size as f64 / 1024.0))
            .collect();
        let choice = Select::new("Qual arquivo remover?", options).raw_prompt()?;
        // failures are already reported as notices
        let _ = self.intake.remove(&mut state.session, choice.index);
        Ok(())
    }

    /// Files, content and result are kept; only the step changes.
    async fn back_to_upload(&self) {
        let mut state = self.state.lock().await;
        if let Err(e) = state.session.go_to(Step::Upload) {
            self.notifier.notify(&e.notice());
        }
    }

    async fn extract(&self) {
        let mut state = self.state.lock().await;
        let progress = TerminalProgress::new();
        let outcome = self
            .extraction
            .extract(state.session.files(), &progress)
            .await;
        match outcome {
            Ok(content) => state.session.set_content(content),
            Err(e) => debug!(error = %e, fatal = e.is_fatal(), "extraction run ended"),
        }
    }

    async fn evaluate(&self) {
        let mut state = self.state.lock().await;
        if let Err(e) = state.session.go_to(Step::Evaluate) {
            self.notifier.notify(&e.notice());
            return;
        }
        let Some(content) = state.session.content().cloned() else {
            return;
        };
        let progress = TerminalProgress::new();
        match self.evaluation.evaluate(&content, &progress).await {
            Ok(result) => state.session.set_result(result),
            Err(e) => debug!(error = %e, fatal = e.is_fatal(), "evaluation run ended"),
        }
    }

    async fn view_report(&self) {
        let mut state = self.state.lock().await;
        if let Err(e) = state.session.go_to(Step::Report) {
            self.notifier.notify(&e.notice());
            return;
        }
        let Some(result) = state.session.result() else {
            return;
        };
        let view = present(result);
        let mut out = stdout();
        let _ = out.execute(SetForegroundColor(Color::Magenta));
        let _ = out.execute(Print(format!(
            "\r\nNota final: {}/10 ({})  Aprovação: {}%\r\n",
            view.final_score,
            view.tier.label(),
            view.approval_percentage
        )));
        let _ = out.execute(ResetColor);
        for (summary, section) in view.sections.iter().zip(&result.sections) {
            let _ = out.execute(Print(format!(
                "  {}: {} ({}/{})\r\n",
                summary.key, summary.title, summary.approved, summary.total
            )));
            for item in &section.items {
                let mark = if item.approved { "✅" } else { "❌" };
                let _ = out.execute(Print(format!("    {} {}\r\n", mark, item.name)));
                if let Some(hint) = improvement_hint(item) {
                    let _ = out.execute(Print(format!("       {}\r\n", hint)));
                }
            }
        }
        for rating in &result.qualitative {
            let _ = out.execute(Print(format!("  {}: {}\r\n", rating.criterion, rating.rating)));
        }
        let _ = out.execute(Print(format!("\r\n\"{}\"\r\n\r\n", view.closing_remark)));
        let _ = out.flush();
    }

    async fn report_action(&self, action: MenuAction) {
        let state = self.state.lock().await;
        let Some(result) = state.session.result() else {
            self.notifier
                .notify(&DomainError::StepUnavailable(Step::Report).notice());
            return;
        };
        match action {
            MenuAction::SaveReport => self.reports.save(result).await,
            MenuAction::EmailReport => self.reports.email(result).await,
            _ => self.reports.present(result).await,
        };
    }

    async fn chat_loop(&self) -> Result<(), InquireError> {
        loop {
            self.flush_transcript().await;
            let voice = self.state.lock().await.chat.voice_enabled();
            let help = if voice {
                "Enter vazio volta ao menu. /voz para ditar."
            } else {
                "Enter vazio volta ao menu."
            };
            let input = Text::new("Você:").with_help_message(help).prompt()?;
            let text = input.trim();
            if text.is_empty() {
                return Ok(());
            }

            let posted = {
                let mut state = self.state.lock().await;
                if text == VOICE_COMMAND {
                    let Ok(dictated) = state.chat.capture_voice().await.map(str::to_string)
                    else {
                        continue;
                    };
                    let send = Confirm::new(&format!("Enviar \"{}\"?", dictated))
                        .with_default(true)
                        .prompt()?;
                    if !send {
                        state.chat.set_draft(String::new());
                        continue;
                    }
                    state.chat.post_draft().is_some()
                } else {
                    state.chat.post(text).is_some()
                }
            };
            if !posted {
                continue;
            }

            // show the user's message while the assistant is typing
            self.flush_transcript().await;
            let mut guard = self.state.lock().await;
            let state = &mut *guard;
            let context = state.session.context();
            let spinner = typing_spinner();
            state.chat.reply(Some(&context)).await;
            spinner.finish_and_clear();
        }
    }

    /// Lets the assistant react to the current session, then prints anything new.
    async fn sync_chat(&self) {
        {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;
            let context = state.session.context();
            state.chat.observe(&context);
        }
        self.flush_transcript().await;
    }

    async fn flush_transcript(&self) {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let transcript = state.chat.transcript();
        for message in &transcript[state.printed.min(transcript.len())..] {
            print_message(message);
        }
        state.printed = transcript.len();
    }
}

fn typing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Vivi está digitando...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_message(message: &ChatMessage) {
    let (who, color) = match message.sender {
        Sender::Assistant => ("Vivi", Color::Magenta),
        Sender::User => ("Você", Color::Cyan),
    };
    let time = message.timestamp.with_timezone(&chrono::Local).format("%H:%M");
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(format!("[{}] {}: ", time, who)));
    let _ = out.execute(ResetColor);
    let _ = out.execute(Print(format!("{}\r\n", message.text)));
    let _ = out.flush();
}

/// Esc goes back to the menu; Ctrl-C leaves.
fn should_quit(e: &InquireError) -> bool {
    !matches!(e, InquireError::OperationCanceled)
}

#[async_trait]
impl InputPort for TuiApp {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            self.sync_chat().await;
            let step = self.state.lock().await.session.step();
            let prompt = format!("Etapa atual: {}. O que deseja fazer?", step);
            let action = match Select::new(&prompt, MenuAction::ALL.to_vec())
                .with_page_size(MenuAction::ALL.len())
                .prompt()
            {
                Ok(action) => action,
                Err(e) if should_quit(&e) => break,
                Err(_) => continue,
            };
            debug!(?action, "menu action");

            let prompted = match action {
                MenuAction::AddFiles => self.add_files().await,
                MenuAction::RemoveFile => self.remove_file().await,
                MenuAction::BackToUpload => {
                    self.back_to_upload().await;
                    Ok(())
                }
                MenuAction::Extract => {
                    self.extract().await;
                    Ok(())
                }
                MenuAction::Evaluate => {
                    self.evaluate().await;
                    Ok(())
                }
                MenuAction::ViewReport => {
                    self.view_report().await;
                    Ok(())
                }
                MenuAction::SaveReport | MenuAction::EmailReport | MenuAction::PresentReport => {
                    self.report_action(action).await;
                    Ok(())
                }
                MenuAction::Chat => self.chat_loop().await,
                MenuAction::Quit => break,
            };
            if let Err(e) = prompted {
                if should_quit(&e) {
                    break;
                }
            }
        }
        info!("session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::ManualClock;
    use crate::adapters::files::MemoryReader;
    use crate::adapters::judge::KeywordJudge;
    use crate::adapters::notifier::RecordingNotifier;
    use crate::adapters::report::{LogMailer, MarkdownReportStore, TerminalDisplay};
    use crate::adapters::speech::UnsupportedSpeech;
    use crate::domain::replies::STEP_UPLOAD_REPLY;
    use crate::domain::{CHECKLIST, ExtractedContent};
    use crate::ports::Clock;
    use crate::usecases::ChatSettings;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn app(reports_dir: &std::path::Path) -> TuiApp {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::default());
        let notifier: Arc<dyn NotifierPort> = Arc::new(RecordingNotifier::new());
        TuiApp::new(
            IntakeService::new(notifier.clone()),
            ExtractionService::new(
                Arc::new(MemoryReader::new()),
                clock.clone(),
                notifier.clone(),
                Duration::ZERO,
            ),
            EvaluationService::new(
                Arc::new(KeywordJudge::default()),
                clock.clone(),
                notifier.clone(),
                CHECKLIST,
                Duration::ZERO,
            ),
            ReportService::new(
                Arc::new(MarkdownReportStore::new(reports_dir)),
                Arc::new(LogMailer::new(None)),
                Arc::new(TerminalDisplay),
                notifier.clone(),
            ),
            ChatAssistant::new(
                clock,
                Arc::new(UnsupportedSpeech),
                notifier.clone(),
                StdRng::seed_from_u64(1),
                ChatSettings::default(),
            ),
            notifier,
        )
    }

    #[tokio::test]
    async fn test_back_to_upload_keeps_content_and_upload_replies() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        {
            let mut state = app.state.lock().await;
            state.session.set_content(ExtractedContent {
                text: "Escopo definido".to_string(),
                sources: vec!["escopo.txt".to_string()],
            });
            assert_eq!(state.session.step(), Step::Evaluate);
        }

        app.back_to_upload().await;

        let mut guard = app.state.lock().await;
        let state = &mut *guard;
        assert_eq!(state.session.step(), Step::Upload);
        assert!(state.session.content().is_some());
        let context = state.session.context();
        let reply = state.chat.send("e agora?", Some(&context)).await.unwrap();
        assert_eq!(reply.text, STEP_UPLOAD_REPLY);
    }

    #[test]
    fn test_menu_labels_are_unique() {
        let labels: Vec<String> = MenuAction::ALL.iter().map(|a| a.to_string()).collect();
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }

    #[test]
    fn test_escape_returns_to_menu() {
        assert!(!should_quit(&InquireError::OperationCanceled));
        assert!(should_quit(&InquireError::OperationInterrupted));
    }
}
