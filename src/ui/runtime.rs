use crate::catalog::Catalog;
use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::carousel::CarouselTiming;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;

/// Mount the gallery and run until the user quits or a signal arrives.
pub fn run(config: &Config, catalog: Catalog, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let tick_rate = config.ui.tick_rate();
    let timing = CarouselTiming {
        animation: config.carousel.animation(),
        auto_advance: config.carousel.auto_advance(),
    };
    let mut app = App::new(
        catalog,
        config.demo.clone(),
        timing,
        config.carousel.autoplay,
        Instant::now(),
    );
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    let events = EventHandler::new(tick_rate, shutdown.clone());
    tracing::info!(
        projects = app.catalog().len(),
        autoplay = config.carousel.autoplay,
        "gallery mounted"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            shutdown.signal();
        }
        if shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, Instant::now()),
            Ok(AppEvent::Paste(text)) => app.on_paste(text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    drop(events);
    drop(guard);
    tracing::info!("gallery unmounted");
    Ok(())
}
