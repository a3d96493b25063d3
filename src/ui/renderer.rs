use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    protein::ResiduePolicy,
    ui::{format_blocks, get_charge_color, get_residue_color, get_symbol_color, BLOCK_SIZE},
    App,
};

/// Width of the composition bar at 100%
const BAR_WIDTH: f64 = 20.0;

pub fn render_ui(f: &mut Frame, app: &App) {
    let main_horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Percentage(35),
        ])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(9),
            Constraint::Length(3),
        ])
        .split(main_horizontal_split[0]);

    render_title(f, app, chunks[0]);
    render_sequence(f, app, chunks[1]);
    render_properties(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);
    render_composition(f, app, main_horizontal_split[1]);
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let policy = match app.policy {
        ResiduePolicy::Strict => Span::styled("strict", Style::default().fg(Color::Green)),
        ResiduePolicy::Lenient => Span::styled("lenient", Style::default().fg(Color::Yellow)),
    };

    let spans = vec![
        Span::styled("Protparam", Style::default().fg(Color::Cyan)),
        Span::raw("   "),
        Span::raw("Residues: "),
        policy,
    ];

    let title_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title_widget, area);
}

fn render_sequence(f: &mut Frame, app: &App, area: Rect) {
    let formatted = format_blocks(&app.input, BLOCK_SIZE);
    let spans: Vec<Span> = formatted
        .chars()
        .map(|c| Span::styled(c.to_string(), Style::default().fg(get_symbol_color(c))))
        .collect();

    let sequence_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().title("Sequence").borders(Borders::ALL))
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(sequence_widget, area);
}

fn render_properties(f: &mut Frame, app: &App, area: Rect) {
    let properties = &app.properties;
    let charge = app.neutral_charge();

    let property_lines = vec![
        Line::from(vec![
            Span::raw("Number of Amino Acids: "),
            Span::styled(properties.amino_acid_count.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("Molecular Weight: "),
            Span::styled(format!("{:.1} Da", properties.molecular_weight), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Molar Extinction Coefficient: "),
            Span::styled(format!("{:.2}", properties.molar_extinction), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Mass Extinction Coefficient: "),
            Span::styled(format!("{:.2}", properties.mass_extinction), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Theoretical pI: "),
            Span::styled(format!("{:.2}", properties.isoelectric_point), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Net Charge at pH 7: "),
            Span::styled(format!("{charge:+.2}"), Style::default().fg(get_charge_color(charge))),
        ]),
    ];

    let properties_widget = Paragraph::new(property_lines)
        .block(Block::default().title("Protein Properties").borders(Borders::ALL));
    f.render_widget(properties_widget, area);
}

fn render_composition(f: &mut Frame, app: &App, area: Rect) {
    let composition_lines: Vec<Line> = app
        .properties
        .composition
        .iter()
        .map(|(residue, percentage)| {
            let color = get_residue_color(*residue);
            let bar = "█".repeat((percentage / 100.0 * BAR_WIDTH).round() as usize);
            Line::from(vec![
                Span::styled(format!("{} {} ", residue.symbol(), residue.code()), Style::default().fg(color)),
                Span::raw(format!("{percentage:6.2}% ")),
                Span::styled(bar, Style::default().fg(color)),
            ])
        })
        .collect();

    let composition_widget = Paragraph::new(composition_lines)
        .block(Block::default().title("Amino Acid Composition").borders(Borders::ALL));
    f.render_widget(composition_widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = match &app.status_message {
        Some(message) => Span::styled(message.clone(), Style::default().fg(Color::Red)),
        None if app.input.is_empty() => Span::styled(
            "Type a protein sequence. Backspace deletes, Delete clears, Esc quits.",
            Style::default().fg(Color::White),
        ),
        None => Span::styled(
            "Continue typing, or press Esc to quit.",
            Style::default().fg(Color::White),
        ),
    };

    let status_widget = Paragraph::new(vec![Line::from(vec![status])])
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_render_shows_properties() {
        let mut app = App::default();
        for c in "MTEITAAMVKELRESTGAGAMKIAESRQQ".chars() {
            app.on_key(c);
        }
        let text = rendered_text(&app);
        assert!(text.contains("Number of Amino Acids: 29"));
        assert!(text.contains("Theoretical pI: 7.21"));
        assert!(text.contains("MTEITAAMVK ELRESTGAGA"));
        assert!(text.contains("Amino Acid Composition"));
    }

    #[test]
    fn test_render_shows_status_message() {
        let mut app = App::default();
        app.on_key('B');
        let text = rendered_text(&app);
        assert!(text.contains("'B' is not one of the 20 standard amino acids"));
    }
}
