use crate::fehler::{Fehler, Result};

/// Eine validierte Berechnungsanfrage: Anzahl der Rechtecke und Anzahl der Arbeiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anfrage {
    intervalle: u64, // Gesamtanzahl der Rechtecke über [0, 1].
    threads: usize,  // Anzahl der Arbeiter, einer pro Partition.
}

impl Anfrage {
    /// Validiert die Rohwerte. Beide müssen mindestens 1 sein, sonst wird
    /// abgelehnt, bevor irgendetwas partitioniert oder gestartet wird.
    pub fn neu(intervalle: i64, threads: i64) -> Result<Self> {
        if intervalle < 1 {
            return Err(Fehler::UngültigesArgument {
                parameter: "intervalle",
                wert: intervalle,
            });
        }
        if threads < 1 {
            return Err(Fehler::UngültigesArgument {
                parameter: "threads",
                wert: threads,
            });
        }

        // Passt threads nicht in usize, wären das ohnehin mehr Threads als das System starten kann.
        let threads = usize::try_from(threads).map_err(|_| Fehler::UngültigesArgument {
            parameter: "threads",
            wert: threads,
        })?;

        Ok(Anfrage {
            intervalle: intervalle as u64,
            threads,
        })
    }

    pub fn intervalle(&self) -> u64 {
        self.intervalle
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Mehr Arbeiter als Rechtecke: erlaubt, aber einige Arbeiter bekommen nichts zu tun.
    pub fn überbelegt(&self) -> bool {
        self.threads as u64 > self.intervalle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gültige_anfrage() {
        let anfrage = Anfrage::neu(1_000, 4).unwrap();
        assert_eq!(anfrage.intervalle(), 1_000);
        assert_eq!(anfrage.threads(), 4);
        assert!(!anfrage.überbelegt());
    }

    #[test]
    fn null_und_negative_werte_werden_abgelehnt() {
        for (intervalle, threads) in [(0, 4), (100, 0), (-5, 4), (10, -1)] {
            let fehler = Anfrage::neu(intervalle, threads).unwrap_err();
            assert!(fehler.ist_ungültiges_argument(), "({intervalle}, {threads})");
        }
    }

    #[test]
    fn intervalle_werden_zuerst_geprüft() {
        match Anfrage::neu(0, 0) {
            Err(Fehler::UngültigesArgument { parameter, wert }) => {
                assert_eq!(parameter, "intervalle");
                assert_eq!(wert, 0);
            }
            other => panic!("unerwartet: {other:?}"),
        }
    }

    #[test]
    fn überbelegung_wird_erkannt() {
        assert!(Anfrage::neu(10, 50).unwrap().überbelegt());
        assert!(!Anfrage::neu(10, 10).unwrap().überbelegt());
    }
}
