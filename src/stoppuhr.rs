use std::time::{Duration, Instant};

/// Misst die Wanddauer vom Start der Arbeiter bis nach dem letzten Join.
#[derive(Debug, Default)]
pub struct Stoppuhr {
    start: Option<Instant>,  // Gesetzt direkt vor dem Starten der Arbeiter.
    dauer: Option<Duration>, // Gesetzt direkt nach dem Join.
}

impl Stoppuhr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine neue Messung und verwirft eine eventuell vorherige.
    pub fn starte(&mut self) {
        self.dauer = None;
        self.start = Some(Instant::now());
    }

    /// Beendet die laufende Messung. Ohne vorheriges `starte` passiert nichts.
    pub fn stoppe(&mut self) {
        if let Some(start) = self.start.take() {
            self.dauer = Some(start.elapsed());
        }
    }

    /// Gemessene Dauer in Sekunden; erst nach einer abgeschlossenen Messung verfügbar.
    pub fn sekunden(&self) -> Option<f64> {
        self.dauer.map(|d| d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vor_der_ersten_messung_leer() {
        let uhr = Stoppuhr::new();
        assert_eq!(uhr.sekunden(), None);
    }

    #[test]
    fn stoppen_ohne_start_ändert_nichts() {
        let mut uhr = Stoppuhr::new();
        uhr.stoppe();
        assert_eq!(uhr.sekunden(), None);
    }

    #[test]
    fn neuer_start_verwirft_alte_messung() {
        let mut uhr = Stoppuhr::new();
        uhr.starte();
        uhr.stoppe();
        assert!(uhr.sekunden().is_some());

        uhr.starte();
        assert_eq!(uhr.sekunden(), None);
    }

    #[test]
    fn misst_mindestens_die_schlafdauer() {
        let mut uhr = Stoppuhr::new();
        uhr.starte();
        std::thread::sleep(Duration::from_millis(5));
        uhr.stoppe();
        assert!(uhr.sekunden().unwrap() >= 0.005);
    }
}
