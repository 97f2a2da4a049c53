use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use indoc::indoc;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use term_kit::breakpoints::parse_encoded;
use term_kit::components::{
    Component, DropdownComponent, RevealComponent, StatusBar, TooltipComponent, dropdown, reveal,
};
use term_kit::drivers::console::ConsoleInputDriver;
use term_kit::event_loop::{ControlFlow, EventLoop};
use term_kit::geometry::Viewport;
use term_kit::position::{Position, TextDirection};
use term_kit::shell::Shell;
use term_kit::{theme, tracing_sub};

/// Overlay toolkit demo: anchored dropdown, tooltip, responsive modal.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Initial dropdown position (e.g. "bottom", "top", "center bottom")
    #[arg(long, default_value = "bottom")]
    position: Position,

    /// Right-to-left text direction
    #[arg(long)]
    rtl: bool,

    /// Breakpoint tiers, query-string encoded (widths in columns)
    #[arg(long, default_value = "small=0&medium=80&large=120")]
    breakpoints: String,
}

const HELP_BODY: &str = indoc! {"
    d        toggle the dropdown
    t        toggle the tooltip
    h        this help
    arrows   navigate the open dropdown
    esc      close the active overlay
    ctrl+q   quit

    Resize the terminal to watch the status
    bar cross breakpoint tiers.
"};

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init_default();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(&cli, size.width, size.height);
    let result = run(&mut terminal, &mut app);

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

struct App {
    shell: Shell,
    dropdown: DropdownComponent,
    tooltip: TooltipComponent,
    modal: RevealComponent,
    status: StatusBar,
}

impl App {
    fn new(cli: &Cli, width: u16, height: u16) -> Self {
        let direction = if cli.rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        };
        let mut shell = Shell::new(
            parse_encoded(&cli.breakpoints),
            Viewport::sized(width as f64, height as f64),
            direction,
        );
        shell.register(dropdown::COMPONENT, dropdown::command_table());
        shell.register(reveal::COMPONENT, reveal::command_table());

        let dropdown = DropdownComponent::new(
            " Menu ",
            Rect {
                x: 2,
                y: 1,
                width: 8,
                height: 1,
            },
            vec![
                "New window".into(),
                "Split pane".into(),
                "Preferences".into(),
                "About".into(),
            ],
        )
        .with_position(cli.position);
        let tooltip = TooltipComponent::new(
            Rect {
                x: 14,
                y: 1,
                width: 9,
                height: 1,
            },
            "anchored hint",
        );
        let mut modal = RevealComponent::new(" Help ", HELP_BODY);
        modal.set_size(46.0, 14.0);

        Self {
            shell,
            dropdown,
            tooltip,
            modal,
            status: StatusBar::new(),
        }
    }

    fn relayout_overlays(&mut self) {
        let ctx = self.shell.context(true);
        self.dropdown.relayout(&ctx);
        self.tooltip.relayout(&ctx);
    }

    fn handle_event(&mut self, event: &Event) -> ControlFlow {
        if let Event::Resize(width, height) = event {
            if let Some(change) = self.shell.handle_resize(*width, *height) {
                self.dropdown.breakpoint_changed(&change);
                self.tooltip.breakpoint_changed(&change);
                self.modal.breakpoint_changed(&change);
                self.status.breakpoint_changed(&change);
            }
            self.relayout_overlays();
            return ControlFlow::Continue;
        }
        let Event::Key(key) = event else {
            return ControlFlow::Continue;
        };
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return ControlFlow::Quit;
        }

        // the modal is exclusive while open
        if self.modal.is_open() {
            let ctx = self.shell.context(true);
            self.modal.handle_event(event, &ctx);
            return ControlFlow::Continue;
        }

        let ctx = self.shell.context(true);
        if self.dropdown.handle_event(event, &ctx) {
            return ControlFlow::Continue;
        }
        match key.code {
            KeyCode::Char('d') => {
                let ctx = self.shell.context(true);
                self.dropdown.toggle(&ctx);
            }
            KeyCode::Char('t') => {
                let ctx = self.shell.context(true);
                self.tooltip.toggle(&ctx);
            }
            KeyCode::Char('h') => self.modal.open(),
            _ => {}
        }
        ControlFlow::Continue
    }

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }
        let ctx = self.shell.context(true);

        let tooltip_anchor = Paragraph::new(" hover me ")
            .style(Style::default().bg(theme::anchor_bg()).fg(theme::anchor_fg()));
        frame.render_widget(
            tooltip_anchor,
            Rect {
                x: 14,
                y: 1,
                width: 9,
                height: 1,
            }
            .intersection(area),
        );

        self.status.set_left("d dropdown | t tooltip | h help");
        let status_area = Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        };
        self.status.render(frame, status_area, &ctx);

        self.dropdown.render(frame, area, &ctx);
        self.tooltip.render(frame, area, &ctx);
        self.modal.render(frame, area, &ctx);
    }
}

fn run<B>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    B: ratatui::backend::Backend<Error = io::Error>,
{
    let mut event_loop = EventLoop::new(ConsoleInputDriver::new(), Duration::from_millis(16));
    event_loop.run(|_, event| {
        if let Some(event) = event {
            if let ControlFlow::Quit = app.handle_event(&event) {
                return Ok(ControlFlow::Quit);
            }
        }
        terminal.draw(|frame| app.draw(frame))?;
        Ok(ControlFlow::Continue)
    })
}
