//! Implements ReportDisplay. Clears the terminal and prints the report full screen.

use crate::domain::{DomainError, EvaluationResult};
use crate::ports::ReportDisplay;
use crate::usecases::report_presenter::{ScoreTier, present, render_markdown};
use crossterm::ExecutableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{Write, stdout};

fn tier_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::Excellent => Color::Green,
        ScoreTier::Good => Color::Yellow,
        ScoreTier::NeedsImprovement => Color::Red,
    }
}

#[derive(Debug, Default)]
pub struct TerminalDisplay;

#[async_trait::async_trait]
impl ReportDisplay for TerminalDisplay {
    async fn present(&self, result: &EvaluationResult) -> Result<(), DomainError> {
        let view = present(result);
        let md = render_markdown(result);
        let mut out = stdout();
        let io = |e: std::io::Error| DomainError::Export(format!("terminal: {}", e));

        out.execute(Clear(ClearType::All)).map_err(io)?;
        out.execute(MoveTo(0, 0)).map_err(io)?;
        out.execute(SetForegroundColor(tier_color(view.tier)))
            .map_err(io)?;
        out.execute(Print(format!(
            "{}/10  {}\r\n\r\n",
            view.final_score,
            view.tier.label()
        )))
        .map_err(io)?;
        out.execute(ResetColor).map_err(io)?;
        for line in md.lines() {
            out.execute(Print(format!("{}\r\n", line))).map_err(io)?;
        }
        out.flush().map_err(io)?;
        Ok(())
    }
}
