//! Terminal demo - three service carousels stacked in a scrolling page.
//!
//! Left/Right navigate the most visible carousel, Up/Down scroll the page,
//! digits jump the top carousel's dots, `n` clicks its next control.
//! `q`, Escape or Ctrl+C quits. Autoplay runs every 3 seconds unless
//! `SPARK_CAROUSEL_AUTOPLAY_MS` is set.
//!
//! Run with: `cargo run --example terminal`

use std::cell::Cell;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{cursor, execute, queue, terminal};
use spark_carousel::{
    mount, poll_event, CarouselConfig, ContainerId, ContainerSpec, ElementId, Geometry,
    InputEvent, MountHandle, Rect, SlotName,
};
use tracing_subscriber::EnvFilter;

const SECTION_ROWS: f32 = 6.0;
const SECTIONS: [&str; 3] = ["it-services", "web-development", "automation"];

struct TerminalPage {
    scroll: Cell<f32>,
    rows: Cell<f32>,
}

impl Geometry for TerminalPage {
    fn container_rect(&self, id: &ContainerId) -> Option<Rect> {
        let position = SECTIONS.iter().position(|s| *s == id.as_str())? as f32;
        let top = position * SECTION_ROWS - self.scroll.get();
        Some(Rect::new(top, top + SECTION_ROWS))
    }

    fn viewport_height(&self) -> f32 {
        self.rows.get()
    }
}

fn slot_label(slot: usize) -> &'static str {
    match SlotName::from_slot(slot) {
        Some(SlotName::Left) => "left",
        Some(SlotName::Center) => "CENTER",
        Some(SlotName::Right) => "right",
        Some(SlotName::HiddenRight) => "(right)",
        Some(SlotName::HiddenLeft) => "(left)",
        None => "-",
    }
}

fn draw(out: &mut impl Write, handle: &MountHandle, page: &TerminalPage) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0), terminal::Clear(terminal::ClearType::All))?;

    let scroll = page.scroll.get() as usize;
    let mut lines = Vec::new();
    for id in SECTIONS {
        let Some(carousel) = handle.carousel(&id.into()) else {
            continue;
        };
        lines.push(format!(
            "== {id} (card {}/{})",
            carousel.current_index() + 1,
            carousel.total_cards()
        ));
        let cards: Vec<String> = carousel
            .placements()
            .iter()
            .map(|p| format!("#{}:{}", p.absolute_index, slot_label(p.slot)))
            .collect();
        lines.push(format!("   {}", cards.join("  ")));
        let dots: String = carousel
            .dots()
            .iter()
            .map(|d| if d.active { '●' } else { '○' })
            .collect();
        lines.push(format!("   {dots}"));
        lines.extend(std::iter::repeat_n(String::new(), SECTION_ROWS as usize - 3));
    }

    for (row, line) in lines.iter().skip(scroll).take(page.rows.get() as usize).enumerate() {
        queue!(out, cursor::MoveTo(0, row as u16))?;
        write!(out, "{line}")?;
    }
    out.flush()
}

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best effort: nothing useful to do if restoring fails
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // 3s unless SPARK_CAROUSEL_AUTOPLAY_MS says otherwise
    let config = CarouselConfig::default()
        .with_autoplay_delay(Duration::from_secs(3))
        .and_then(CarouselConfig::with_env)
        .map_err(io::Error::other)?;

    let containers = SECTIONS.iter().enumerate().map(|(i, id)| {
        ContainerSpec::new(*id, format!("{id}-next"))
            .with_cards(3 + i)
            .with_indicators(format!("{id}-dots"))
    });
    let mut handle = mount(containers, &config);

    let (_, rows) = terminal::size()?;
    let page = TerminalPage {
        scroll: Cell::new(0.0),
        rows: Cell::new(rows as f32),
    };

    let mut out = io::stdout();
    let guard = TerminalGuard::enter(&mut out)?;

    let max_scroll = SECTIONS.len() as f32 * SECTION_ROWS;
    let mut dirty = true;
    while handle.is_running() {
        if let Some(event) = poll_event(Duration::from_millis(50))? {
            match &event {
                InputEvent::Key(key) if key.is_key_down() => match key.key.as_str() {
                    "q" | "Escape" => handle.stop(),
                    "ArrowDown" => page.scroll.set((page.scroll.get() + 1.0).min(max_scroll)),
                    "ArrowUp" => page.scroll.set((page.scroll.get() - 1.0).max(0.0)),
                    "n" => {
                        let next = ElementId::new(format!("{}-next", SECTIONS[0]));
                        handle.dispatch(&InputEvent::Click(next), &page);
                    }
                    digit if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) => {
                        let dot = ElementId::new(format!("{}-dot-{digit}", SECTIONS[0]));
                        handle.dispatch(&InputEvent::Click(dot), &page);
                    }
                    _ => {
                        handle.dispatch(&event, &page);
                    }
                },
                InputEvent::Resize(_, h) => page.rows.set(*h as f32),
                _ => {}
            }
            dirty = true;
        }
        if handle.tick() > 0 {
            dirty = true;
        }
        if dirty {
            draw(&mut out, &handle, &page)?;
            dirty = false;
        }
    }

    drop(guard);
    handle.unmount();
    Ok(())
}
