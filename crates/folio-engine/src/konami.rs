//! Konami code easter egg
//!
//! A rolling buffer of the most recent key codes, compared whole against
//! the classic sequence on every key press. A match starts the rainbow
//! animation and reports success to the caller. The buffer is not cleared
//! after a match, so feeding the sequence again retriggers it.

use crate::ops::DomOp;
use crate::options::PageOptions;

/// Key codes for Up Up Down Down Left Right Left Right B A
pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Notification shown when the sequence lands
pub const KONAMI_MESSAGE: &str = "\u{1f389} Konami Code activated! You found the easter egg!";

/// Rolling key buffer and rainbow timer for the easter egg
#[derive(Clone, Debug, Default)]
pub struct KonamiEgg {
    buffer: Vec<u32>,
    rainbow_until: Option<f64>,
}

impl KonamiEgg {
    /// Create with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key code; returns true when the buffer matches the
    /// sequence. A retrigger while the rainbow is running restarts the
    /// animation and extends its deadline.
    pub fn handle_key(&mut self, code: u32, now: f64, opts: &PageOptions, ops: &mut Vec<DomOp>) -> bool {
        self.buffer.push(code);
        if self.buffer.len() > KONAMI_SEQUENCE.len() {
            self.buffer.remove(0);
        }

        if self.buffer == KONAMI_SEQUENCE {
            tracing::info!("konami code activated");
            self.rainbow_until = Some(now + opts.rainbow_duration_ms);
            ops.push(DomOp::RainbowSet { on: true });
            true
        } else {
            false
        }
    }

    /// Clear the rainbow once its deadline passes
    pub fn tick(&mut self, now: f64, ops: &mut Vec<DomOp>) {
        if let Some(until) = self.rainbow_until {
            if now >= until {
                self.rainbow_until = None;
                ops.push(DomOp::RainbowSet { on: false });
            }
        }
    }

    /// Whether the rainbow animation is currently running
    pub fn rainbow_active(&self) -> bool {
        self.rainbow_until.is_some()
    }

    /// Recent key codes, oldest first
    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(egg: &mut KonamiEgg, codes: &[u32], opts: &PageOptions, ops: &mut Vec<DomOp>) -> bool {
        let mut triggered = false;
        for (i, &code) in codes.iter().enumerate() {
            triggered = egg.handle_key(code, i as f64, opts, ops);
        }
        triggered
    }

    #[test]
    fn test_exact_sequence_triggers() {
        let mut egg = KonamiEgg::new();
        let opts = PageOptions::default();
        let mut ops = Vec::new();

        assert!(feed(&mut egg, &KONAMI_SEQUENCE, &opts, &mut ops));
        assert!(egg.rainbow_active());
        assert_eq!(ops, vec![DomOp::RainbowSet { on: true }]);
    }

    #[test]
    fn test_same_codes_out_of_order_do_not_trigger() {
        let mut egg = KonamiEgg::new();
        let opts = PageOptions::default();
        let mut ops = Vec::new();

        let shuffled = [38, 40, 38, 40, 37, 39, 37, 39, 65, 66];
        assert!(!feed(&mut egg, &shuffled, &opts, &mut ops));
        assert!(ops.is_empty());
    }

    #[test]
    fn test_extraneous_prefix_is_forgotten() {
        let mut egg = KonamiEgg::new();
        let opts = PageOptions::default();
        let mut ops = Vec::new();

        // Eleven presses: a stray key, then the full sequence
        let mut codes = vec![13];
        codes.extend_from_slice(&KONAMI_SEQUENCE);
        assert!(feed(&mut egg, &codes, &opts, &mut ops));
    }

    #[test]
    fn test_buffer_survives_match_and_can_retrigger() {
        let mut egg = KonamiEgg::new();
        let opts = PageOptions::default();
        let mut ops = Vec::new();

        assert!(feed(&mut egg, &KONAMI_SEQUENCE, &opts, &mut ops));
        assert_eq!(egg.buffer(), &KONAMI_SEQUENCE);

        // The whole sequence again, against the surviving buffer
        assert!(feed(&mut egg, &KONAMI_SEQUENCE, &opts, &mut ops));
    }

    #[test]
    fn test_rainbow_clears_after_duration() {
        let mut egg = KonamiEgg::new();
        let opts = PageOptions::default();
        let mut ops = Vec::new();

        feed(&mut egg, &KONAMI_SEQUENCE, &opts, &mut ops);
        ops.clear();

        // Triggered at t=9 (last key press index)
        egg.tick(2008.0, &mut ops);
        assert!(egg.rainbow_active());
        assert!(ops.is_empty());

        egg.tick(2009.0, &mut ops);
        assert!(!egg.rainbow_active());
        assert_eq!(ops, vec![DomOp::RainbowSet { on: false }]);
    }

    #[test]
    fn test_retrigger_extends_rainbow() {
        let mut egg = KonamiEgg::new();
        let opts = PageOptions::default();
        let mut ops = Vec::new();

        for &code in &KONAMI_SEQUENCE {
            egg.handle_key(code, 0.0, &opts, &mut ops);
        }
        for &code in &KONAMI_SEQUENCE {
            egg.handle_key(code, 1000.0, &opts, &mut ops);
        }

        egg.tick(2500.0, &mut ops);
        assert!(egg.rainbow_active(), "Second trigger moved the deadline");
        egg.tick(3000.0, &mut ops);
        assert!(!egg.rainbow_active());
    }
}
