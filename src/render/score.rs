use std::time::{Duration, Instant};

use console::{style, StyledObject, Term};

const ANIMATION: Duration = Duration::from_millis(1000);
const FRAME: Duration = Duration::from_millis(16);

/// Color-band a score value: below 50 red, below 80 yellow, else bold
/// default.
pub fn paint(value: u32) -> StyledObject<u32> {
    if value < 50 {
        style(value).red().bold()
    } else if value < 80 {
        style(value).yellow().bold()
    } else {
        style(value).bold()
    }
}

/// Count the score display up from 0 to `target` with an ease-out-quadratic
/// curve, then settle on the exact target. Falls back to a plain line when
/// stdout is not a terminal or animation is disabled.
pub fn render_score(target: u32, animate: bool) {
    let term = Term::stdout();
    if !animate || !term.is_term() {
        println!("Compliance score: {} / 100", paint(target));
        return;
    }

    let start = Instant::now();
    loop {
        let progress = (start.elapsed().as_secs_f64() / ANIMATION.as_secs_f64()).min(1.0);
        let eased = ease_out_quad(progress);
        let current = (eased * f64::from(target)).floor() as u32;

        let _ = term.clear_line();
        let _ = term.write_str(&format!("Compliance score: {} / 100", paint(current)));

        if progress >= 1.0 {
            break;
        }
        std::thread::sleep(FRAME);
    }

    // Settle on the exact target regardless of frame rounding.
    let _ = term.clear_line();
    let _ = term.write_line(&format!("Compliance score: {} / 100", paint(target)));
}

fn ease_out_quad(progress: f64) -> f64 {
    1.0 - (1.0 - progress) * (1.0 - progress)
}
