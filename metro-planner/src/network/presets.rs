//! Built-in demonstration networks.
//!
//! Two networks ship with the planner: a small three-line sample used for
//! walkthroughs and tests, and the Ankara urban rail network. Both are
//! built on demand by plain functions; nothing is constructed at load time.
//!
//! Stations that share a platform across lines (Kızılay, Gar, Demetevler
//! and so on) are separate stations joined by short transfer connections.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::{Network, NetworkBuilder, NetworkError};

/// A line: its name and its stations in running order.
struct LineSpec {
    name: &'static str,
    stations: &'static [(&'static str, &'static str)],
}

/// One step of wiring a network together.
enum Wiring {
    /// A single connection between two stations, in minutes.
    Edge(&'static str, &'static str, u32),
    /// Connect each consecutive pair of stations along a line.
    Ride(&'static LineSpec, u32),
}

fn assemble(lines: &[&LineSpec], wiring: &[Wiring]) -> Result<Network, NetworkError> {
    let mut builder = NetworkBuilder::new();

    for line in lines {
        for &(key, name) in line.stations {
            builder = builder.station(key, name, line.name);
        }
    }

    for step in wiring {
        match *step {
            Wiring::Edge(a, b, minutes) => builder = builder.connect(a, b, minutes),
            Wiring::Ride(line, minutes) => {
                for pair in line.stations.windows(2) {
                    builder = builder.connect(pair[0].0, pair[1].0, minutes);
                }
            }
        }
    }

    builder.build()
}

// ========== Sample network ==========

static SAMPLE_RED: LineSpec = LineSpec {
    name: "Kırmızı Hat",
    stations: &[
        ("K1", "Kızılay"),
        ("K2", "Ulus"),
        ("K3", "Demetevler"),
        ("K4", "OSB"),
    ],
};

static SAMPLE_BLUE: LineSpec = LineSpec {
    name: "Mavi Hat",
    stations: &[
        ("M1", "AŞTİ"),
        ("M2", "Kızılay"),
        ("M3", "Sıhhiye"),
        ("M4", "Gar"),
    ],
};

static SAMPLE_ORANGE: LineSpec = LineSpec {
    name: "Turuncu Hat",
    stations: &[
        ("T1", "Batıkent"),
        ("T2", "Demetevler"),
        ("T3", "Gar"),
        ("T4", "Keçiören"),
    ],
};

/// Build the small three-line sample network.
///
/// Twelve stations on three lines with transfers at Kızılay, Demetevler
/// and Gar.
pub fn sample_network() -> Result<Network, NetworkError> {
    assemble(
        &[&SAMPLE_RED, &SAMPLE_BLUE, &SAMPLE_ORANGE],
        &[
            Wiring::Edge("K1", "K2", 4),
            Wiring::Edge("K2", "K3", 6),
            Wiring::Edge("K3", "K4", 8),
            Wiring::Edge("M1", "M2", 5),
            Wiring::Edge("M2", "M3", 3),
            Wiring::Edge("M3", "M4", 4),
            Wiring::Edge("T1", "T2", 7),
            Wiring::Edge("T2", "T3", 9),
            Wiring::Edge("T3", "T4", 5),
            // Transfers
            Wiring::Edge("K1", "M2", 2),
            Wiring::Edge("K3", "T2", 3),
            Wiring::Edge("M4", "T3", 2),
        ],
    )
}

// ========== Ankara network ==========

static M4_KECIOREN: LineSpec = LineSpec {
    name: "Kırmızı Hat (M4)",
    stations: &[
        ("M4_1", "Kızılay"),
        ("M4_2", "Adliye"),
        ("M4_3", "Gar"),
        ("M4_4", "Atatürk Kültür Merkezi"),
        ("M4_5", "ASKİ"),
        ("M4_6", "Dışkapı"),
        ("M4_7", "Meteoroloji"),
        ("M4_8", "Belediye"),
        ("M4_9", "Mecidiye"),
        ("M4_10", "Kuyubaşı"),
        ("M4_11", "Dutluk"),
        ("M4_12", "Şehitler"),
    ],
};

static A1_ANKARAY: LineSpec = LineSpec {
    name: "Yeşil Hat (A1)",
    stations: &[
        ("A1_1", "AŞTİ"),
        ("A1_2", "Emek"),
        ("A1_3", "Bahçelievler"),
        ("A1_4", "Beşevler"),
        ("A1_5", "Anadolu/ANITKABİR"),
        ("A1_6", "Maltepe"),
        ("A1_7", "Demirtepe"),
        ("A1_8", "Kızılay"),
        ("A1_9", "Kolej"),
        ("A1_10", "Kurtuluş"),
        ("A1_11", "Dikimevi"),
    ],
};

static M2_CAYYOLU: LineSpec = LineSpec {
    name: "Mavi Hat (M2)",
    stations: &[
        ("M2_1", "Koru"),
        ("M2_2", "Çayyolu"),
        ("M2_3", "Ümitköy"),
        ("M2_4", "Beytepe"),
        ("M2_5", "Tarım Bakanlığı/Danıştay"),
        ("M2_6", "Bilkent"),
        ("M2_7", "ODTÜ"),
        ("M2_8", "MTA"),
        ("M2_9", "Söğütözü"),
        ("M2_10", "Milli Kütüphane"),
        ("M2_11", "Necatibey"),
        ("M2_12", "Kızılay"),
    ],
};

static M1_BATIKENT: LineSpec = LineSpec {
    name: "Mavi Hat (M1)",
    stations: &[
        ("M1_1", "Kızılay"),
        ("M1_2", "Sıhhiye"),
        ("M1_3", "Ulus"),
        ("M1_4", "Atatürk Kültür Merkezi"),
        ("M1_5", "Akköprü"),
        ("M1_6", "İvedik"),
        ("M1_7", "Yenimahalle"),
        ("M1_8", "Demetevler"),
        ("M1_9", "Hastane"),
        ("M1_10", "Macunköy"),
        ("M1_11", "Ostim"),
        ("M1_12", "Batıkent"),
    ],
};

static M3_SINCAN: LineSpec = LineSpec {
    name: "Mavi Hat (M3)",
    stations: &[
        ("M3_1", "Batıkent"),
        ("M3_2", "Batı Merkez"),
        ("M3_3", "Mesa"),
        ("M3_4", "Botanik"),
        ("M3_5", "İstanbul Yolu"),
        ("M3_6", "Eryaman 1-2"),
        ("M3_7", "Eryaman 5"),
        ("M3_8", "Devlet Mah."),
        ("M3_9", "Harikalar Diyarı"),
        ("M3_10", "Fatih"),
        ("M3_11", "GOP"),
        ("M3_12", "OSB-Törekent"),
    ],
};

static B1_BASKENTRAY: LineSpec = LineSpec {
    name: "Gri Hat (Başkentray)",
    stations: &[
        ("B_1", "Kayaş"),
        ("B_2", "Köstence"),
        ("B_3", "Üreğil"),
        ("B_4", "Bağderesi"),
        ("B_5", "Mamak"),
        ("B_6", "Saimekadın"),
        ("B_7", "Demirlibahçe"),
        ("B_8", "Cebeci"),
        ("B_9", "Kurtuluş"),
        ("B_10", "Yenişehir"),
        ("B_11", "YHT"),
        ("B_12", "Hipodrom"),
        ("B_13", "Gazimahallesi"),
        ("B_14", "Gazi"),
        ("B_15", "Motor"),
        ("B_16", "Behiçbey"),
        ("B_17", "Yıldırım"),
        ("B_18", "Havadurağı"),
        ("B_19", "Etimesgut"),
        ("B_20", "Özgüneş"),
        ("B_21", "Eryaman YHT"),
        ("B_22", "Elvankent"),
        ("B_23", "Lale"),
        ("B_24", "Sincan"),
    ],
};

static T1_SENTEPE: LineSpec = LineSpec {
    name: "Sarı Hat (Teleferik)",
    stations: &[
        ("T1_1", "Yenimahalle"),
        ("T1_2", "Yunus Emre"),
        ("T1_3", "TRT Seyir"),
        ("T1_4", "Şentepe"),
    ],
};

/// Build the Ankara urban rail network.
///
/// Seven lines and 87 stations: the M1 to M4 metro lines, the Ankaray light
/// rail, the Başkentray commuter line and the Şentepe cable car. Some
/// transfers are walks between differently-named stations, such as AŞTİ to
/// Söğütözü and YHT to Maltepe.
pub fn ankara_network() -> Result<Network, NetworkError> {
    assemble(
        &[
            &M4_KECIOREN,
            &A1_ANKARAY,
            &M2_CAYYOLU,
            &M1_BATIKENT,
            &M3_SINCAN,
            &B1_BASKENTRAY,
            &T1_SENTEPE,
        ],
        &[
            // Kızılay interchange
            Wiring::Edge("M4_1", "A1_8", 5),
            Wiring::Edge("M4_1", "M1_1", 5),
            Wiring::Edge("M4_1", "M2_12", 5),
            Wiring::Edge("A1_8", "M2_11", 3),
            Wiring::Edge("A1_8", "M1_1", 3),
            Wiring::Edge("M2_12", "M1_1", 2),
            // Gar - Maltepe, Atatürk Kültür Merkezi
            Wiring::Edge("M4_3", "A1_6", 4),
            Wiring::Edge("M4_4", "M1_4", 3),
            Wiring::Ride(&M4_KECIOREN, 2),
            // AŞTİ - Söğütözü walk
            Wiring::Edge("A1_1", "M2_9", 10),
            Wiring::Ride(&A1_ANKARAY, 2),
            Wiring::Ride(&M2_CAYYOLU, 3),
            Wiring::Ride(&M1_BATIKENT, 3),
            Wiring::Ride(&M3_SINCAN, 3),
            // Batıkent
            Wiring::Edge("M3_1", "M1_12", 2),
            Wiring::Ride(&B1_BASKENTRAY, 3),
            // Başkentray interchanges
            Wiring::Edge("B_9", "A1_10", 5),
            Wiring::Edge("B_10", "M1_2", 5),
            Wiring::Edge("B_11", "A1_6", 4),
            Wiring::Edge("B_11", "M4_3", 4),
            Wiring::Ride(&T1_SENTEPE, 4),
            // Yenimahalle
            Wiring::Edge("T1_1", "M1_7", 4),
        ],
    )
}

// ========== Preset selection ==========

/// Error returned when a preset name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network preset {0:?} (expected \"sample\" or \"ankara\")")]
pub struct UnknownPreset(String);

/// The built-in networks, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// [`sample_network`]
    Sample,
    /// [`ankara_network`]
    #[default]
    Ankara,
}

impl Preset {
    /// Build the selected network.
    pub fn build(self) -> Result<Network, NetworkError> {
        debug!(preset = %self, "building preset network");
        match self {
            Preset::Sample => sample_network(),
            Preset::Ankara => ankara_network(),
        }
    }

    /// Returns the name this preset is selected by.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Sample => "sample",
            Preset::Ankara => "ankara",
        }
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(Preset::Sample),
            "ankara" => Ok(Preset::Ankara),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
