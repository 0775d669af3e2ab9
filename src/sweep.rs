//! Messreihe: jede Intervallanzahl gegen Threadanzahlen 1..=max, als CSV.

use std::io::Write;

use tracing::info;

use crate::anfrage::Anfrage;
use crate::fehler::Result;
use crate::rechner::{PiRechner, Strategie};

/// Kopfzeile der CSV-Ausgabe.
pub const KOPFZEILE: [&str; 4] = ["Intervals", "Threads", "Time (s)", "Pi Approximation"];

/// Standard-Intervallanzahlen, wenn keine angegeben sind.
pub const STANDARD_INTERVALLE: [i64; 3] = [1_000_000, 10_000_000, 100_000_000];

/// Standardobergrenze für die Threadanzahl.
pub const STANDARD_MAX_THREADS: i64 = 50;

/// Eine Zeile der Messreihe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Messpunkt {
    pub intervalle: u64,
    pub threads: usize,
    pub dauer_sekunden: f64,
    pub pi: f64,
}

/// Führt die Messreihe aus und schreibt jede Zeile sofort nach `ziel`.
///
/// Ein einziger Rechner wird für alle Kombinationen neu konfiguriert.
/// Ungültige Werte brechen ab, bevor irgendetwas geschrieben wird.
pub fn führe_sweep_aus<W: Write>(
    ziel: W,
    intervall_liste: &[i64],
    max_threads: i64,
    strategie: Strategie,
) -> Result<Vec<Messpunkt>> {
    // Alle Werte vorab prüfen, damit keine halbe Datei entsteht.
    for &intervalle in intervall_liste {
        Anfrage::neu(intervalle, max_threads)?;
    }
    let erste_intervalle = intervall_liste.first().copied().unwrap_or(1);
    let mut rechner = PiRechner::konfiguriere(erste_intervalle, 1)?.mit_strategie(strategie);

    let mut schreiber = csv::Writer::from_writer(ziel);
    schreiber.write_record(KOPFZEILE)?;

    let mut messpunkte = Vec::new();
    for &intervalle in intervall_liste {
        for threads in 1..=max_threads {
            rechner.neu_konfigurieren(intervalle, threads)?;
            let ergebnis = rechner.berechne()?;

            let punkt = Messpunkt {
                intervalle: rechner.anfrage().intervalle(),
                threads: rechner.anfrage().threads(),
                dauer_sekunden: ergebnis.dauer_sekunden,
                pi: ergebnis.pi,
            };
            schreiber.write_record(&[
                punkt.intervalle.to_string(),
                punkt.threads.to_string(),
                format!("{:.15}", punkt.dauer_sekunden),
                format!("{:.15}", punkt.pi),
            ])?;
            messpunkte.push(punkt);
        }
        schreiber.flush()?; // Nach jeder Intervallanzahl sichern.
        info!(intervalle, max_threads, "Messreihe für Intervallanzahl abgeschlossen");
    }

    schreiber.flush()?;
    Ok(messpunkte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schreibt_kopfzeile_und_eine_zeile_pro_kombination() {
        let mut puffer = Vec::new();
        let punkte = führe_sweep_aus(&mut puffer, &[100, 1_000], 3, Strategie::Threads).unwrap();
        assert_eq!(punkte.len(), 6);

        let text = String::from_utf8(puffer).unwrap();
        let zeilen: Vec<&str> = text.lines().collect();
        assert_eq!(zeilen[0], "Intervals,Threads,Time (s),Pi Approximation");
        assert_eq!(zeilen.len(), 7);
        assert!(zeilen[1].starts_with("100,1,"));
        assert!(zeilen[6].starts_with("1000,3,"));
    }

    #[test]
    fn ungültige_werte_schreiben_nichts() {
        let mut puffer = Vec::new();
        let fehler = führe_sweep_aus(&mut puffer, &[100, 0], 2, Strategie::Threads).unwrap_err();
        assert!(fehler.ist_ungültiges_argument());
        assert!(puffer.is_empty());

        let fehler = führe_sweep_aus(&mut puffer, &[100], 0, Strategie::Rayon).unwrap_err();
        assert!(fehler.ist_ungültiges_argument());
        assert!(puffer.is_empty());
    }

    #[test]
    fn mehr_threads_als_intervalle_sind_erlaubt() {
        let punkte = führe_sweep_aus(std::io::sink(), &[2], 3, Strategie::Threads).unwrap();
        assert_eq!(punkte.len(), 3);
        assert!(punkte.iter().all(|p| p.intervalle == 2));
        assert_eq!(punkte[2].threads, 3);
    }

    #[test]
    fn leere_intervallliste_schreibt_nur_kopfzeile() {
        let mut puffer = Vec::new();
        let punkte = führe_sweep_aus(&mut puffer, &[], i64::MAX, Strategie::Threads).unwrap();
        assert!(punkte.is_empty());
        assert_eq!(
            String::from_utf8(puffer).unwrap().trim_end(),
            "Intervals,Threads,Time (s),Pi Approximation"
        );
    }

    #[test]
    fn gleiche_pi_werte_über_threadanzahlen() {
        let punkte = führe_sweep_aus(std::io::sink(), &[1_200], 4, Strategie::Rayon).unwrap();
        let referenz = punkte[0].pi;
        for punkt in &punkte {
            assert!((punkt.pi - referenz).abs() < 1e-9, "{punkt:?}");
        }
    }
}
