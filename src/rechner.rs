//! Der Rechner: partitionieren, Arbeiter starten, auf alle warten, reduzieren.

use std::fmt;
use std::thread;

use rayon::prelude::*; // Für die Rayon-Strategie.
use tracing::{debug, info, warn};

use crate::anfrage::Anfrage;
use crate::arbeiter::teilsumme;
use crate::fehler::{Fehler, Result};
use crate::partition::{partitioniere, Partition};
use crate::reduktion::reduziere;
use crate::stoppuhr::Stoppuhr;

/// Wie die Arbeiter ausgeführt werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategie {
    /// Ein frisch gestarteter Betriebssystem-Thread pro Arbeiter.
    #[default]
    Threads,
    /// Ein pro Aufruf neu gebauter Rayon-Pool mit genau `threads` Threads.
    Rayon,
}

impl fmt::Display for Strategie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategie::Threads => write!(f, "threads"),
            Strategie::Rayon => write!(f, "rayon"),
        }
    }
}

/// Ergebnis eines Aufrufs von [`PiRechner::berechne`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ergebnis {
    pub pi: f64,             // Angenäherter Pi Wert.
    pub dauer_sekunden: f64, // Wanddauer von Start bis Join der Arbeiter.
}

/// Die zentrale Struktur für die parallele Integration.
///
/// Kann beliebig oft mit [`PiRechner::berechne`] benutzt und mit
/// [`PiRechner::neu_konfigurieren`] auf andere Werte umgestellt werden.
#[derive(Debug)]
pub struct PiRechner {
    anfrage: Anfrage,
    strategie: Strategie,
    teilergebnisse: Vec<f64>,   // Ein Platz pro Arbeiter, indiziert nach Arbeiter-ID.
    letztes: Option<Ergebnis>,  // Wird bei jedem erfolgreichen Aufruf überschrieben.
}

impl PiRechner {
    /// Erstellt einen Rechner. Nicht positive Werte werden sofort abgelehnt.
    pub fn konfiguriere(intervalle: i64, threads: i64) -> Result<Self> {
        let anfrage = Anfrage::neu(intervalle, threads)?;
        melde_überbelegung(&anfrage);

        Ok(PiRechner {
            anfrage,
            strategie: Strategie::default(),
            teilergebnisse: Vec::new(),
            letztes: None,
        })
    }

    /// Setzt die Ausführungsstrategie.
    pub fn mit_strategie(mut self, strategie: Strategie) -> Self {
        self.strategie = strategie;
        self
    }

    /// Stellt einen bestehenden Rechner auf neue Werte um. Bei ungültigen Werten
    /// bleibt die alte Konfiguration erhalten.
    pub fn neu_konfigurieren(&mut self, intervalle: i64, threads: i64) -> Result<()> {
        let anfrage = Anfrage::neu(intervalle, threads)?;
        melde_überbelegung(&anfrage);
        self.anfrage = anfrage;
        Ok(())
    }

    pub fn setze_strategie(&mut self, strategie: Strategie) {
        self.strategie = strategie;
    }

    pub fn anfrage(&self) -> Anfrage {
        self.anfrage
    }

    pub fn strategie(&self) -> Strategie {
        self.strategie
    }

    /// Letztes vollständiges Ergebnis, `None` vor dem ersten Aufruf.
    pub fn letztes_ergebnis(&self) -> Option<Ergebnis> {
        self.letztes
    }

    /// Dauer des letzten erfolgreichen Aufrufs; stammt immer aus demselben Lauf wie
    /// [`PiRechner::letztes_ergebnis`].
    pub fn dauer_sekunden(&self) -> Option<f64> {
        self.letztes.map(|e| e.dauer_sekunden)
    }

    /// Teilsummen des letzten erfolgreichen Aufrufs in Reihenfolge der Arbeiter-ID.
    pub fn teilergebnisse(&self) -> &[f64] {
        &self.teilergebnisse
    }

    /// Führt einen kompletten Durchlauf aus und gibt Pi und die Dauer zurück.
    ///
    /// Kehrt erst zurück, wenn alle Arbeiter fertig sind.
    pub fn berechne(&mut self) -> Result<Ergebnis> {
        let starte: Starter = match self.strategie {
            Strategie::Threads => starte_threads,
            Strategie::Rayon => starte_rayon,
        };
        self.führe_aus(starte)
    }

    /// Ein Durchlauf mit gegebener Ausführung. Puffer, Ergebnis und Dauer werden nur
    /// übernommen, wenn alle Arbeiter erfolgreich gestartet und fertig geworden sind.
    fn führe_aus<F>(&mut self, starte: F) -> Result<Ergebnis>
    where
        F: FnOnce(&[Partition], u64, &mut [f64]) -> Result<()>,
    {
        let intervalle = self.anfrage.intervalle();
        let threads = self.anfrage.threads();

        let partitionen = partitioniere(intervalle, threads);
        let leer = partitionen.iter().filter(|p| p.ist_leer()).count();
        debug!(intervalle, threads, leer, strategie = %self.strategie, "Partitionen erstellt");

        // Frischer Ergebnispuffer für diesen Aufruf.
        let mut plätze = vec![0.0; threads];

        let mut stoppuhr = Stoppuhr::new();
        stoppuhr.starte();
        let lauf = starte(&partitionen, intervalle, &mut plätze);
        stoppuhr.stoppe();
        lauf?;

        let pi = reduziere(&plätze);
        let dauer_sekunden = stoppuhr.sekunden().unwrap_or_default();
        let ergebnis = Ergebnis { pi, dauer_sekunden };

        info!(
            intervalle,
            threads,
            strategie = %self.strategie,
            pi,
            dauer_sekunden,
            "Berechnung abgeschlossen"
        );

        self.teilergebnisse = plätze;
        self.letztes = Some(ergebnis);
        Ok(ergebnis)
    }
}

type Starter = fn(&[Partition], u64, &mut [f64]) -> Result<()>;

fn melde_überbelegung(anfrage: &Anfrage) {
    if anfrage.überbelegt() {
        warn!(
            intervalle = anfrage.intervalle(),
            threads = anfrage.threads(),
            "Mehr Threads als Intervalle, einige Arbeiter bleiben ohne Arbeit"
        );
    }
}

/// Ein benannter Thread pro Partition. Jeder Thread besitzt exklusiv seinen Platz im Puffer;
/// das Ende des Scopes ist die Join-Barriere.
fn starte_threads(partitionen: &[Partition], intervalle: u64, plätze: &mut [f64]) -> Result<()> {
    thread::scope(|scope| -> Result<()> {
        for (id, (platz, &partition)) in plätze.iter_mut().zip(partitionen).enumerate() {
            thread::Builder::new()
                .name(format!("pi-arbeiter-{id}"))
                .spawn_scoped(scope, move || {
                    *platz = teilsumme(partition, intervalle);
                })
                .map_err(|quelle| Fehler::ThreadStart {
                    arbeiter: id,
                    quelle,
                })?;
        }
        debug!(arbeiter = partitionen.len(), "Alle Arbeiter gestartet, warte auf Join");
        Ok(())
    })
}

/// Frischer Rayon-Pool mit genau so vielen Threads wie Partitionen; wird nach dem Aufruf verworfen.
fn starte_rayon(partitionen: &[Partition], intervalle: u64, plätze: &mut [f64]) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(partitionen.len())
        .thread_name(|i| format!("pi-rayon-{i}"))
        .build()?;

    pool.install(|| {
        plätze
            .par_iter_mut()
            .zip(partitionen.par_iter())
            .for_each(|(platz, &partition)| {
                *platz = teilsumme(partition, intervalle);
            });
    });
    Ok(())
}
