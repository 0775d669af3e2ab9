use clap::{Parser, Subcommand, ValueEnum};   // Kommandozeilen-Argumente.
use std::fs::File;                          // Für die CSV-Ausgabe in eine Datei.
use std::io::{self, Write};                 // Eingabe-/Ausgabefunktionen mit Flush zum Schreiben in den Output-Buffer.
use std::path::PathBuf;
use std::process;

use pi_integrieren::sweep::{self, STANDARD_INTERVALLE, STANDARD_MAX_THREADS};
use pi_integrieren::{Fehler, PiRechner, Strategie};

#[derive(Parser)]
#[command(name = "pi_integrieren")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Annäherung von Pi durch parallele numerische Integration (Mittelpunktsregel)")]
struct Cli {
    #[command(subcommand)]
    befehl: Befehl,
}

#[derive(Subcommand)]
enum Befehl {
    /// Eine einzelne Berechnung; fehlende Werte werden interaktiv abgefragt
    Berechne {
        /// Anzahl der Rechtecke über [0, 1]
        #[arg(short, long, allow_negative_numbers = true)]
        intervalle: Option<i64>,

        /// Anzahl der Arbeiter-Threads
        #[arg(short, long, allow_negative_numbers = true)]
        threads: Option<i64>,

        /// Ausführungsstrategie
        #[arg(short, long, value_enum, default_value_t = StrategieArg::Threads)]
        strategie: StrategieArg,
    },

    /// Messreihe über Intervallanzahlen und Threadanzahlen 1..=max als CSV
    Sweep {
        /// Zieldatei (Standard: stdout)
        #[arg(short, long)]
        ausgabe: Option<PathBuf>,

        /// Größte Threadanzahl
        #[arg(short, long, default_value_t = STANDARD_MAX_THREADS)]
        max_threads: i64,

        /// Intervallanzahlen (mehrfach angebbar)
        #[arg(short, long, num_args = 1.., allow_negative_numbers = true)]
        intervalle: Vec<i64>,

        /// Ausführungsstrategie
        #[arg(short, long, value_enum, default_value_t = StrategieArg::Threads)]
        strategie: StrategieArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategieArg {
    Threads,
    Rayon,
}

impl From<StrategieArg> for Strategie {
    fn from(arg: StrategieArg) -> Self {
        match arg {
            StrategieArg::Threads => Strategie::Threads,
            StrategieArg::Rayon => Strategie::Rayon,
        }
    }
}

// Hilfsfunktion für Benutzereingabe.
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?; // Prompt sofort anzeigen.
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

// Fragt eine Ganzzahl ab, solange bis die Eingabe parsbar ist.
fn frage_zahl(prompt: &str) -> io::Result<i64> {
    loop {
        let eingabe = get_user_input(prompt)?;
        match eingabe.parse::<i64>() {
            Ok(zahl) => return Ok(zahl),
            Err(_) => println!("Ungültige Eingabe. Bitte gib eine ganze Zahl ein."),
        }
    }
}

/// Einzelberechnung mit Ausgabe auf 15 Nachkommastellen.
fn berechne(intervalle: Option<i64>, threads: Option<i64>, strategie: Strategie) -> Result<(), Fehler> {
    println!("\nAnnäherung von Pi (π) durch Integration von 4 / (1 + x²) über [0, 1].");
    println!("Verfügbare Threads im System: {}\n", rayon::current_num_threads());

    // Fehlende Werte interaktiv abfragen.
    let intervalle = match intervalle {
        Some(wert) => wert,
        None => frage_zahl("Gib die Anzahl der Intervalle ein (z.B. 100000000): ")?,
    };
    let threads = match threads {
        Some(wert) => wert,
        None => frage_zahl("Gib die Anzahl der Threads ein (z.B. 4): ")?,
    };

    // Ungültige Werte werden hier abgelehnt, bevor ein Thread gestartet wird.
    let mut rechner = PiRechner::konfiguriere(intervalle, threads)?.mit_strategie(strategie);
    let ergebnis = rechner.berechne()?;

    // Gibt die berechneten Ergebnisse an die Konsole aus:
    println!("\nErgebnisse:");
    println!("π Annäherung:   {:.15}", ergebnis.pi);                          // Die approximierte Annäherung von π.
    println!("Eigentliches π: {:.15}", std::f64::consts::PI);                 // Der tatsächliche Wert von π aus den Rust-Konstanten.
    println!("Abweichung:     {:.15}", (ergebnis.pi - std::f64::consts::PI).abs());
    println!("Berechnungszeit: {:.15} Sekunden", ergebnis.dauer_sekunden);    // Wanddauer von Start bis Join.
    println!("Strategie:       {}", strategie);

    Ok(())
}

/// Messreihe; schreibt in die Datei oder nach stdout.
fn messreihe(
    ausgabe: Option<PathBuf>,
    max_threads: i64,
    intervalle: Vec<i64>,
    strategie: Strategie,
) -> Result<(), Fehler> {
    let intervalle = if intervalle.is_empty() {
        STANDARD_INTERVALLE.to_vec() // Ohne Angabe die Standardliste verwenden.
    } else {
        intervalle
    };

    let punkte = match ausgabe {
        Some(pfad) => {
            let datei = File::create(&pfad)?;
            let punkte = sweep::führe_sweep_aus(datei, &intervalle, max_threads, strategie)?;
            eprintln!("Ergebnisse gespeichert in {}", pfad.display());
            punkte
        }
        None => sweep::führe_sweep_aus(io::stdout().lock(), &intervalle, max_threads, strategie)?,
    };

    eprintln!("{} Messpunkte aufgenommen.", punkte.len());
    Ok(())
}

// Hauptprogramm
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pi_integrieren=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let ergebnis = match cli.befehl {
        Befehl::Berechne {
            intervalle,
            threads,
            strategie,
        } => berechne(intervalle, threads, strategie.into()),
        Befehl::Sweep {
            ausgabe,
            max_threads,
            intervalle,
            strategie,
        } => messreihe(ausgabe, max_threads, intervalle, strategie.into()),
    };

    // Ausdrückliche Ablehnung statt eines Zahlenwerts.
    if let Err(e) = ergebnis {
        eprintln!("\n{}", e);
        process::exit(if e.ist_ungültiges_argument() { 2 } else { 1 });
    }
}
