//! Fehlertypen für die Pi-Integration

use thiserror::Error;

/// Ergebnistyp für alle Operationen des Rechners.
pub type Result<T> = std::result::Result<T, Fehler>;

/// Fehler, die bei Konfiguration und Berechnung auftreten können.
#[derive(Error, Debug)]
pub enum Fehler {
    /// Intervall- oder Threadanzahl ist nicht positiv.
    #[error("Ungültiges Argument: {parameter} muss mindestens 1 sein (erhalten: {wert})")]
    UngültigesArgument {
        parameter: &'static str,
        wert: i64,
    },

    /// Das Betriebssystem konnte keinen Arbeiter-Thread starten.
    #[error("Arbeiter-Thread {arbeiter} konnte nicht gestartet werden: {quelle}")]
    ThreadStart {
        arbeiter: usize,
        #[source]
        quelle: std::io::Error,
    },

    /// Der Rayon-Threadpool konnte nicht aufgebaut werden.
    #[error("Threadpool konnte nicht erstellt werden: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Schreiben der CSV-Ausgabe ist fehlgeschlagen.
    #[error("CSV-Fehler: {0}")]
    Csv(#[from] csv::Error),

    /// Ein-/Ausgabefehler.
    #[error("E/A-Fehler: {0}")]
    Io(#[from] std::io::Error),
}

impl Fehler {
    /// Prüft, ob es sich um eine abgelehnte Eingabe handelt.
    pub fn ist_ungültiges_argument(&self) -> bool {
        matches!(self, Fehler::UngültigesArgument { .. })
    }
}
