use rectprogress::prelude::*;
use std::time::Duration;

// A headless host loop: a worker thread advances the progress while the loop
// waits for redraw requests and replays the widget into a recorder.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let update = UpdateManager::new();
    let sheet = StyleSheet::from_env_or_default();
    let mut bar = RectProgressBar::from_theme(&sheet, update.clone());

    let size = bar.measure(MeasureSpec::exactly(160), MeasureSpec::unspecified());
    let layout = LayoutNode::sized(size.x, size.y);

    let progress = bar.progress_signal();
    let worker = std::thread::spawn(move || {
        for value in (0..=100).step_by(10) {
            progress.set_value(value);
            std::thread::sleep(Duration::from_millis(50));
        }
    });

    let mut graphics = RecordingGraphics::new();
    loop {
        if tokio::time::timeout(Duration::from_secs(1), update.notified())
            .await
            .is_err()
        {
            break;
        }

        update.take();
        if bar.update(&layout).contains(Update::DRAW) {
            graphics.clear();
            bar.render(&mut graphics, &layout);
            println!(
                "progress {:>3}: {} stroke(s)",
                bar.progress(),
                graphics.commands().len()
            );
        }
    }

    if let Err(panic) = worker.join() {
        eprintln!("progress worker panicked");
        std::panic::resume_unwind(panic);
    }
}
