//! Interactive counter: host drains a typed event channel and re-renders
//! on every state change.
//!
//! Keys: `+`/`-` adjust the counter, `q` quits.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ember_tui::{
    channel, Attr, BorderStyle, Component, ComponentView, Constraint, FlexStyle, FrameBuffer,
    Outlet, Rgba, StyleNode, TermRenderer, View,
};

#[derive(Clone, Default)]
struct CounterState {
    count: i64,
}

enum CounterEvent {
    Increment,
    Decrement,
    Quit,
}

struct Counter;

impl Component for Counter {
    type State = CounterState;

    fn construct(&self, state: &Self::State) -> Vec<StyleNode> {
        let card = View::plain()
            .with_border(BorderStyle::Rounded)
            .with_foreground(Rgba::CYAN);
        let label = View::plain()
            .with_text(format!("count: {}", state.count))
            .with_attrs(Attr::BOLD);
        let hint = View::plain().with_text("+/- to change, q to quit");

        vec![
            StyleNode::new(
                FlexStyle {
                    padding: ember_tui::Edges::uniform(1),
                    ..FlexStyle::sized(30, 6)
                },
                card,
            )
            .with_child(StyleNode::new(FlexStyle::default(), label))
            .with_child(StyleNode::new(FlexStyle::default(), hint)),
        ]
    }

    fn volatile(&self) -> bool {
        true
    }
}

fn map_key(code: KeyCode, outlet: &Outlet<CounterEvent>) {
    match code {
        KeyCode::Char('+') | KeyCode::Char('=') => outlet.emit(CounterEvent::Increment),
        KeyCode::Char('-') => outlet.emit(CounterEvent::Decrement),
        KeyCode::Char('q') | KeyCode::Esc => outlet.emit(CounterEvent::Quit),
        _ => {}
    }
}

fn main() -> ember_tui::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (outlet, events) = channel();
    let (cols, rows) = ember_tui::terminal_size();

    let mut component = ComponentView::new(Counter);
    let mut buffer = FrameBuffer::new(cols, rows);
    let mut renderer = TermRenderer::new();
    renderer.enter_fullscreen()?;

    let result = run(&mut component, &mut buffer, &mut renderer, &outlet, &events, cols, rows);
    renderer.leave_fullscreen()?;
    result
}

fn run(
    component: &mut ComponentView<Counter>,
    buffer: &mut FrameBuffer,
    renderer: &mut TermRenderer,
    outlet: &Outlet<CounterEvent>,
    events: &ember_tui::Events<CounterEvent>,
    cols: u16,
    rows: u16,
) -> ember_tui::Result<()> {
    loop {
        component.render(Constraint::tight(cols, rows))?;
        buffer.clear();
        buffer.paint(component.root());
        renderer.render(buffer)?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    map_key(key.code, outlet);
                }
            }
        }

        for ev in events.drain() {
            let mut state = component.state().clone();
            match ev {
                CounterEvent::Increment => state.count += 1,
                CounterEvent::Decrement => state.count -= 1,
                CounterEvent::Quit => return Ok(()),
            }
            component.set_state(state);
        }
    }
}
