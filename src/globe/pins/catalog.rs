// src/globe/pins/catalog.rs
use crate::math::{GlobeError, GlobeResult};

/// Anzeigeinhalt eines Pins
#[derive(Debug, Clone, PartialEq)]
pub struct GeoInfo {
    pub title: String,
    pub body: String,
    pub image_url: String,
}

/// Feste geografische Position mit Infotext (Grad)
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    latitude: f32,
    longitude: f32,
    info: GeoInfo,
}

impl GeoPoint {
    /// Erstellt einen Punkt. Ungültige Koordinaten werden abgelehnt, nicht geklemmt.
    pub fn new(latitude: f32, longitude: f32, info: GeoInfo) -> GlobeResult<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GlobeError::NonFiniteCoordinate { title: info.title });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GlobeError::LatitudeOutOfRange { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GlobeError::LongitudeOutOfRange { value: longitude });
        }

        Ok(Self {
            latitude,
            longitude,
            info,
        })
    }

    pub fn latitude(&self) -> f32 {
        self.latitude
    }

    pub fn longitude(&self) -> f32 {
        self.longitude
    }

    pub fn info(&self) -> &GeoInfo {
        &self.info
    }
}

/// Rohdatensatz der Landmarken-Liste
struct LandmarkRecord {
    lat: f32,
    lon: f32,
    title: &'static str,
    body: &'static str,
    image_url: &'static str,
}

// Reihenfolge ist relevant: Index 0 wird von der Demo aufgedeckt.
const LANDMARKS: &[LandmarkRecord] = &[
    LandmarkRecord {
        lat: 30.5852,
        lon: 32.2654,
        title: "Suezkanal: Schlüssel für den Welthandel",
        body: "Der Kanal in Ägypten verbindet das Mittelmeer mit dem Roten Meer und erlaubt den Schiffsverkehr zwischen Europa und Asien, ohne Afrika zu umrunden. Rund 12 % des Welthandels laufen durch ihn.",
        image_url: "https://cadenaser.com/resizer/v2/GGLGCS73DVOLVID3SIIOFY45FI.jpg?auth=89529ecb0d534b78ad57d642da573c8e9e77e557b299108c8fc02354050ebb11&quality=70&width=1200&height=900&smart=true",
    },
    LandmarkRecord {
        lat: -22.9068,
        lon: -67.67,
        title: "Lithium-Dreieck: Strategischer Rohstoff",
        body: "Argentinien, Bolivien und Chile besitzen die größten Lithiumreserven der Welt. Das Metall ist zentral für Batterien und die Energiewende und damit ein strategischer Rohstoff der Technologiebranche.",
        image_url: "https://media.realinstitutoelcano.org/wp-content/uploads/2018/09/salar-atacama.jpg",
    },
    LandmarkRecord {
        lat: 48.3794,
        lon: 31.1656,
        title: "Krieg Russland-Ukraine: Geopolitische und energetische Folgen",
        body: "Seit 2022 verändert dieser Konflikt die europäische Sicherheit und das globale Energiegleichgewicht. Russland ist ein wichtiger Gas- und Öllieferant, die Ukraine ein bedeutender Agrarproduzent.",
        image_url: "https://elordenmundial.com/wp-content/uploads/2024/04/guerra-rusia-ucrania.jpg",
    },
    LandmarkRecord {
        lat: 26.5653,
        lon: 56.25,
        title: "Straße von Hormus: Nadelöhr des Öltransports",
        body: "Zwischen Iran und Oman liegt die wichtigste Meerenge für den Öltransport; etwa 20 % des weltweiten Rohöls passieren sie. Jeder Konflikt in der Region kann die Energiemärkte erschüttern.",
        image_url: "https://www.revistaeyn.com/binrepository/1200x784/0c0/0d0/none/26086/QVYD/estrechoormuz_7233892_20240415091147.jpg",
    },
    LandmarkRecord {
        lat: -2.8762,
        lon: 23.656,
        title: "Kongobecken: Bodenschätze und Artenvielfalt",
        body: "Reich an Coltan, Kobalt und Diamanten, die für die Technologieindustrie unverzichtbar sind. Artenvielfalt und Wasserreserven machen die Region zu einem Schlüsselgebiet für den globalen Umweltschutz, trotz Konflikten und illegalem Abbau.",
        image_url: "https://es.greenpeace.org/es/wp-content/uploads/sites/3/2017/11/62a58d8f-gp0str4qg_pressmedia-2100x1401.jpg",
    },
    LandmarkRecord {
        lat: 34.1498,
        lon: 76.8259,
        title: "Kaschmir: Umstrittene Region zweier Atommächte",
        body: "Zwischen Indien und Pakistan umstritten, beide im Besitz von Atomwaffen. Die Lage, der Zugang zu Wasser und die Auswirkungen auf die Sicherheit Südasiens machen die Region bedeutsam.",
        image_url: "https://img.eldefinido.cl/portadas/1200/2016-08-22-5878TGR2968.jpg",
    },
    LandmarkRecord {
        lat: 45.4641,
        lon: 147.75,
        title: "Kurilen: Streit zwischen Russland und Japan",
        body: "Seit dem Zweiten Weltkrieg umstrittene Inselkette. Ihre Kontrolle bringt militärische Vorteile und strategischen Zugang zum Nordpazifik.",
        image_url: "https://lh5.googleusercontent.com/p/AF1QipMKJRdhT5JXd0yDdLXR0bH5enz5YpnRTHv751A5=w743-h429-n-k-no",
    },
    LandmarkRecord {
        lat: 51.9225,
        lon: 4.4792,
        title: "Rotterdam: Größter Hafen Europas",
        body: "Der wichtigste Logistikknoten Europas mit enormen Fracht- und Energievolumen. Moderne Infrastruktur macht ihn zentral für den Handel zwischen Europa, Asien und Amerika.",
        image_url: "https://www.amsterdam.net/es/wp-content/uploads/sites/93/rotterdam-hd.jpg",
    },
];

/// Liefert alle Landmarken in fester Reihenfolge, jeweils validiert.
pub fn landmarks() -> Vec<GlobeResult<GeoPoint>> {
    LANDMARKS
        .iter()
        .map(|record| {
            GeoPoint::new(
                record.lat,
                record.lon,
                GeoInfo {
                    title: record.title.to_string(),
                    body: record.body.to_string(),
                    image_url: record.image_url.to_string(),
                },
            )
        })
        .collect()
}
