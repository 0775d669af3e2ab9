//! Aufteilung des Indexbereichs [0, N) auf die Arbeiter.

/// Halboffener Indexbereich `[start, ende)`, den genau ein Arbeiter bearbeitet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub start: u64,
    pub ende: u64,
}

impl Partition {
    pub fn länge(&self) -> u64 {
        self.ende - self.start
    }

    pub fn ist_leer(&self) -> bool {
        self.start == self.ende
    }
}

/// Teilt `[0, intervalle)` in `threads` zusammenhängende, lückenlose Partitionen,
/// geordnet nach Arbeiter-ID.
///
/// Jede Partition bekommt `intervalle / threads` Indizes, die letzte zusätzlich den Rest.
/// Gibt es mehr Threads als Intervalle, bekommen die ersten `intervalle` Partitionen
/// je einen Index und die übrigen bleiben leer (`[intervalle, intervalle)`).
///
/// Aufrufer garantieren `threads >= 1` (siehe [`crate::Anfrage`]).
pub fn partitioniere(intervalle: u64, threads: usize) -> Vec<Partition> {
    debug_assert!(threads >= 1, "threads muss mindestens 1 sein");

    let anzahl = threads as u64;
    let basis = intervalle / anzahl; // Grundgröße jeder Partition.

    (0..anzahl)
        .map(|i| {
            if basis == 0 {
                // Überbelegung: ein Index pro Partition, solange Indizes übrig sind.
                let start = i.min(intervalle);
                let ende = (i + 1).min(intervalle);
                Partition { start, ende }
            } else {
                let start = i * basis;
                let ende = if i == anzahl - 1 { intervalle } else { start + basis };
                Partition { start, ende }
            }
        })
        .collect()
}
