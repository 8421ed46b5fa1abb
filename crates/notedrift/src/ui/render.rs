use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{ActiveNote, Settings};
use crate::ui::components::footer_bar::FooterBar;
use crate::ui::components::help_overlay::HelpOverlay;
use crate::ui::components::palette_overlay::PaletteOverlay;
use crate::ui::pages::browse::BrowsePage;
use crate::ui::pages::settings::SettingsPage;
use crate::ui::state::app_mode::{AppMode, HelpContext};

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Immutable data required to draw a single UI frame.
pub struct RenderContext<'a> {
    pub active_note: Option<&'a ActiveNote>,
    pub mode: &'a AppMode,
    pub settings: Settings,
    pub vault_dir: &'a Path,
}

/// Renders a complete frame including status bar, content area, and footer.
pub fn render(f: &mut Frame, context: &RenderContext<'_>) {
    let area = f.area();
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    render_status_bar(f, status_bar_area, context.active_note);
    FooterBar::new(
        context.vault_dir.display().to_string(),
        context.settings.expand_to_subfolders,
    )
    .render(f, footer_bar_area);

    route_content(f, content_area, context);
}

/// Draws the page (and overlay, if any) for the current mode.
fn route_content(f: &mut Frame, area: Rect, context: &RenderContext<'_>) {
    match context.mode {
        AppMode::Browse { scroll_offset } => {
            BrowsePage::new(context.active_note, *scroll_offset).render(f, area);
        }
        AppMode::Settings => {
            SettingsPage::new(context.settings).render(f, area);
        }
        AppMode::CommandPalette {
            input,
            selected_index,
            focus,
        } => {
            BrowsePage::new(context.active_note, 0).render(f, area);
            PaletteOverlay::new(input, *selected_index, *focus).render(f, area);
        }
        AppMode::Help {
            context: help_context,
            scroll_offset,
        } => {
            render_help_background(f, area, context, help_context);
            HelpOverlay::new(help_context, *scroll_offset).render(f, area);
        }
    }
}

/// Draws the page the help overlay was opened from.
fn render_help_background(
    f: &mut Frame,
    area: Rect,
    context: &RenderContext<'_>,
    help_context: &HelpContext,
) {
    match help_context {
        HelpContext::Browse { scroll_offset } => {
            BrowsePage::new(context.active_note, *scroll_offset).render(f, area);
        }
        HelpContext::Settings => {
            SettingsPage::new(context.settings).render(f, area);
        }
    }
}

/// Renders the top bar with the app version and the active note path.
fn render_status_bar(f: &mut Frame, area: Rect, active_note: Option<&ActiveNote>) {
    let mut spans = vec![Span::styled(
        format!(" notedrift v{}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(note) = active_note {
        spans.push(Span::styled(
            format!("  {}", note.path),
            Style::default().fg(Color::White),
        ));
    }

    let status_bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));

    f.render_widget(status_bar, area);
}
