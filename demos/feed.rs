//! Scrollable feed: rows sized through a prototype registry before
//! display, then rendered inside a scrollable container.
//!
//! Keys: up/down or j/k scroll, `q` quits.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ember_tui::{
    scroll, Attr, BorderStyle, Component, ComponentView, Constraint, ContainerKind, Edges,
    FlexStyle, FrameBuffer, PrototypeRegistry, Rgba, StyleNode, TermRenderer, View,
};

#[derive(Clone, Default)]
struct RowState {
    author: String,
    body: String,
}

/// One feed card: author line plus wrapped body.
struct Row;

impl Component for Row {
    type State = RowState;

    fn construct(&self, state: &Self::State) -> Vec<StyleNode> {
        let author = View::plain()
            .with_text(state.author.clone())
            .with_attrs(Attr::BOLD)
            .with_foreground(Rgba::YELLOW);
        let body = View::plain().with_text(state.body.clone());

        vec![
            StyleNode::new(FlexStyle::default(), author),
            StyleNode::new(FlexStyle::default(), body),
        ]
    }

    fn style(&self) -> FlexStyle {
        FlexStyle {
            margin: Edges { top: 0, right: 0, bottom: 1, left: 0 },
            ..FlexStyle::default()
        }
    }

    fn volatile(&self) -> bool {
        true
    }
}

/// The whole feed: one bordered card per row inside a scrollable column.
struct Feed;

impl Component for Feed {
    type State = Vec<RowState>;

    fn construct(&self, state: &Self::State) -> Vec<StyleNode> {
        state
            .iter()
            .map(|row| {
                let card = View::plain()
                    .with_border(BorderStyle::Single)
                    .with_foreground(Rgba::GRAY);
                let author = View::plain()
                    .with_text(row.author.clone())
                    .with_attrs(Attr::BOLD)
                    .with_foreground(Rgba::YELLOW);
                let body = View::plain().with_text(row.body.clone());

                StyleNode::new(
                    FlexStyle { shrink: 0.0, ..FlexStyle::default() },
                    card,
                )
                .with_child(StyleNode::new(FlexStyle::default(), author))
                .with_child(StyleNode::new(FlexStyle::default(), body))
            })
            .collect()
    }

    fn style(&self) -> FlexStyle {
        // Fill the viewport; the rows overflow it and scroll.
        FlexStyle {
            width: ember_tui::Dimension::Percent(100.0),
            height: ember_tui::Dimension::Percent(100.0),
            ..FlexStyle::default()
        }
    }

    fn root_kind(&self) -> ContainerKind {
        ContainerKind::Scrollable
    }

    fn volatile(&self) -> bool {
        true
    }
}

fn sample_rows() -> Vec<RowState> {
    (1..=30)
        .map(|i| RowState {
            author: format!("author {i}"),
            body: format!(
                "Entry number {i}. The quick brown fox jumps over the lazy dog, \
                 wrapping across as many lines as the terminal width requires."
            ),
        })
        .collect()
}

fn main() -> ember_tui::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (cols, rows) = ember_tui::terminal_size();
    let feed_rows = sample_rows();

    // Size rows through the same render path the live feed uses.
    let mut prototypes = PrototypeRegistry::new();
    prototypes.register("row", ComponentView::new(Row));
    for (index, row) in feed_rows.iter().enumerate() {
        let size = prototypes.measure("row", row, cols);
        tracing::debug!(index, height = size.height, "measured row");
    }

    let mut component = ComponentView::with_state(Feed, feed_rows);
    let mut buffer = FrameBuffer::new(cols, rows);
    let mut renderer = TermRenderer::new();
    renderer.enter_fullscreen()?;

    let result = run(&mut component, &mut buffer, &mut renderer, cols, rows);
    renderer.leave_fullscreen()?;
    result
}

fn run(
    component: &mut ComponentView<Feed>,
    buffer: &mut FrameBuffer,
    renderer: &mut TermRenderer,
    cols: u16,
    rows: u16,
) -> ember_tui::Result<()> {
    component.render(Constraint::tight(cols, rows))?;

    loop {
        buffer.clear();
        buffer.paint(component.root());
        renderer.render(buffer)?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                scroll::scroll_by(component.root(), 0, -(scroll::LINE_SCROLL as i32));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                scroll::scroll_by(component.root(), 0, scroll::LINE_SCROLL as i32);
            }
            KeyCode::PageUp => {
                scroll::scroll_by(component.root(), 0, -(rows as i32));
            }
            KeyCode::PageDown => {
                scroll::scroll_by(component.root(), 0, rows as i32);
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            _ => {}
        }
    }
}
