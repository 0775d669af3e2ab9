//! Annäherung von Pi (π) durch numerische Integration von `4 / (1 + x²)` über [0, 1]
//! mit der Mittelpunktsregel, verteilt auf mehrere Threads.
//!
//! ```no_run
//! use pi_integrieren::PiRechner;
//!
//! let mut rechner = PiRechner::konfiguriere(10_000_000, 4)?;
//! let ergebnis = rechner.berechne()?;
//! println!("π ≈ {:.15} in {:.6} s", ergebnis.pi, ergebnis.dauer_sekunden);
//! # Ok::<(), pi_integrieren::Fehler>(())
//! ```

pub mod anfrage;
pub mod arbeiter;
pub mod fehler;
pub mod partition;
pub mod rechner;
pub mod reduktion;
pub mod stoppuhr;
pub mod sweep;

pub use anfrage::Anfrage;
pub use fehler::{Fehler, Result};
pub use partition::{partitioniere, Partition};
pub use rechner::{Ergebnis, PiRechner, Strategie};
