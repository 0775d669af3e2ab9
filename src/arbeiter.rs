use crate::partition::Partition;

/// Mittelpunktsregel für eine Partition: Summe von `1 / (1 + x²)` an den
/// Mittelpunkten `x_i = (i + 0.5) / N`, multipliziert mit der Schrittweite `1 / N`.
///
/// Noch nicht mit 4 skaliert; das erledigt [`crate::reduktion::reduziere`].
/// Eine leere Partition liefert 0.
pub fn teilsumme(partition: Partition, intervalle: u64) -> f64 {
    if partition.ist_leer() {
        return 0.0; // Überbelegung: dieser Arbeiter hat nichts zu tun.
    }

    let schritt = 1.0 / intervalle as f64; // Breite eines Rechtecks.
    let mut summe = 0.0;

    for i in partition.start..partition.ende {
        let x = (i as f64 + 0.5) * schritt; // Mittelpunkt des i-ten Rechtecks.
        summe += 1.0 / (1.0 + x * x);
    }

    summe * schritt
}
