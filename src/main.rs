use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures_util::StreamExt;

use folio::app::App;
use folio::clipboard::SystemClipboard;
use folio::event::Event;
use folio::panzoom::ViewportPanZoomFactory;
use folio::storage::TomlPrefStore;
use folio::tui::{init, restore};
use folio::ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let store = Box::new(TomlPrefStore::open_default());
    let mut app = App::new(
        store,
        Arc::new(SystemClipboard),
        Box::new(ViewportPanZoomFactory),
    )?;

    let mut tui = init()?;
    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(Duration::from_millis(50));

    while app.running {
        tui.draw(|frame| render(frame, &mut app))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    // Resize and focus events fall through to the next draw.
                    Some(Ok(_)) => continue,
                    // If the event stream ends or errors, shut down.
                    Some(Err(_)) | None => break,
                }
            }
        };
        app.handle_event(event);
    }

    restore()?;
    Ok(())
}
