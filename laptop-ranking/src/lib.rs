pub mod attributes;
#[cfg(test)]
mod test;

use serde::{Deserialize, Serialize};

pub use criteria_ranking::{
    rank, Catalog, Criterion, Ranked, RankingError, Score, Weight, Weights,
};

pub use crate::attributes::{
    Battery, Brand, Gpu, Portability, Processor, Ram, Storage, UnknownValue, Usage,
};

/// One candidate machine. Rows are identified positionally by the caller;
/// names are display labels, not unique keys. Every attribute is present
/// on the record, and the catalog in use decides which ones are scored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Laptop {
    pub name: String,
    /// Asking price in rupiah.
    pub price: u64,
    pub ram: Ram,
    pub processor: Processor,
    pub storage: Storage,
    pub gpu: Gpu,
    pub portability: Portability,
    pub battery: Battery,
    pub brand: Brand,
    pub usage: Usage,
}

/// The hardware-focused, seven-criterion catalog.
pub static STANDARD_CATALOG: Catalog<Laptop> = Catalog::new(&[
    Criterion {
        name: "price",
        score: score_price,
    },
    Criterion {
        name: "processor",
        score: score_processor,
    },
    Criterion {
        name: "ram",
        score: score_ram,
    },
    Criterion {
        name: "gpu",
        score: score_gpu,
    },
    Criterion {
        name: "storage",
        score: score_storage,
    },
    Criterion {
        name: "battery",
        score: score_battery,
    },
    Criterion {
        name: "portability",
        score: score_portability,
    },
]);

/// The usage-aware, eight-criterion catalog: swaps the storage criterion
/// for brand and intended-workload criteria.
pub static USAGE_CATALOG: Catalog<Laptop> = Catalog::new(&[
    Criterion {
        name: "price",
        score: score_price,
    },
    Criterion {
        name: "processor",
        score: score_processor,
    },
    Criterion {
        name: "ram",
        score: score_ram,
    },
    Criterion {
        name: "gpu",
        score: score_gpu,
    },
    Criterion {
        name: "brand",
        score: score_brand,
    },
    Criterion {
        name: "usage",
        score: score_usage,
    },
    Criterion {
        name: "battery",
        score: score_battery,
    },
    Criterion {
        name: "portability",
        score: score_portability,
    },
]);

/// Rank a fleet with [`STANDARD_CATALOG`].
pub fn rank_standard<'a>(
    fleet: &'a [Laptop],
    weights: &Weights,
) -> Result<Vec<Ranked<'a, Laptop>>, RankingError> {
    rank(&STANDARD_CATALOG, fleet, weights)
}

/// Rank a fleet with [`USAGE_CATALOG`].
pub fn rank_usage<'a>(
    fleet: &'a [Laptop],
    weights: &Weights,
) -> Result<Vec<Ranked<'a, Laptop>>, RankingError> {
    rank(&USAGE_CATALOG, fleet, weights)
}

/// Weight preset for [`STANDARD_CATALOG`]. Sums to 1.0.
pub fn standard_weights() -> Weights {
    let mut weights = Weights::new();
    for (criterion, weight) in [
        ("price", 0.30),
        ("processor", 0.20),
        ("ram", 0.15),
        ("gpu", 0.15),
        ("storage", 0.10),
        ("battery", 0.05),
        ("portability", 0.05),
    ] {
        weights.insert(criterion, Weight::new(weight).unwrap());
    }
    weights
}

/// Weight preset for [`USAGE_CATALOG`], dominated by the intended
/// workload. Sums to 1.0.
pub fn usage_weights() -> Weights {
    let mut weights = Weights::new();
    for (criterion, weight) in [
        ("price", 0.194),
        ("processor", 0.156),
        ("ram", 0.100),
        ("gpu", 0.075),
        ("brand", 0.039),
        ("usage", 0.353),
        ("battery", 0.060),
        ("portability", 0.023),
    ] {
        weights.insert(criterion, Weight::new(weight).unwrap());
    }
    weights
}

/// A small demo fleet, also the simulator's no-input fallback.
pub fn sample_fleet() -> Vec<Laptop> {
    vec![
        Laptop {
            name: "Asus Zenbook 14".to_owned(),
            price: 15_000_000,
            ram: Ram::Gb16,
            processor: Processor::I7,
            storage: Storage::Ssd512,
            gpu: Gpu::Integrated,
            portability: Portability::Ultralight,
            battery: Battery::AllDay,
            brand: Brand::Asus,
            usage: Usage::Office,
        },
        Laptop {
            name: "Lenovo Legion 5".to_owned(),
            price: 22_000_000,
            ram: Ram::Gb16,
            processor: Processor::I7,
            storage: Storage::Ssd512,
            gpu: Gpu::Rtx,
            portability: Portability::Midweight,
            battery: Battery::Medium,
            brand: Brand::Lenovo,
            usage: Usage::Gaming,
        },
        Laptop {
            name: "MacBook Air M2".to_owned(),
            price: 18_000_000,
            ram: Ram::Gb8,
            processor: Processor::I7,
            storage: Storage::Ssd256,
            gpu: Gpu::Integrated,
            portability: Portability::Ultralight,
            battery: Battery::AllDay,
            brand: Brand::Apple,
            usage: Usage::Design,
        },
    ]
}

/// Price bands in rupiah; cheaper is better.
fn score_price(laptop: &Laptop) -> Score {
    match laptop.price {
        0..=7_000_000 => Score::FOUR,
        7_000_001..=12_000_000 => Score::THREE,
        12_000_001..=20_000_000 => Score::TWO,
        _ => Score::ONE,
    }
}

fn score_processor(laptop: &Laptop) -> Score {
    match laptop.processor {
        Processor::I3 => Score::ONE,
        Processor::I5 => Score::TWO,
        Processor::I7 => Score::THREE,
        Processor::I9 => Score::FOUR,
    }
}

fn score_ram(laptop: &Laptop) -> Score {
    match laptop.ram {
        Ram::Gb8 => Score::ONE,
        Ram::Gb16 => Score::TWO,
        Ram::Gb32 => Score::FOUR,
    }
}

fn score_storage(laptop: &Laptop) -> Score {
    match laptop.storage {
        Storage::Hdd => Score::ONE,
        Storage::Ssd256 => Score::TWO,
        Storage::Ssd512 => Score::THREE,
        Storage::Ssd1Tb => Score::FOUR,
    }
}

fn score_gpu(laptop: &Laptop) -> Score {
    match laptop.gpu {
        Gpu::Integrated => Score::ONE,
        Gpu::Gtx => Score::TWO,
        Gpu::Rtx => Score::THREE,
        Gpu::HighEnd => Score::FOUR,
    }
}

fn score_portability(laptop: &Laptop) -> Score {
    match laptop.portability {
        Portability::Heavy => Score::ONE,
        Portability::Midweight => Score::TWO,
        Portability::Light => Score::THREE,
        Portability::Ultralight => Score::FOUR,
    }
}

fn score_battery(laptop: &Laptop) -> Score {
    match laptop.battery {
        Battery::Short => Score::ONE,
        Battery::Medium => Score::TWO,
        Battery::Long => Score::THREE,
        Battery::AllDay => Score::FOUR,
    }
}

fn score_brand(laptop: &Laptop) -> Score {
    match laptop.brand {
        Brand::Apple => Score::FOUR,
        Brand::Asus | Brand::Lenovo | Brand::Msi => Score::THREE,
        Brand::Hp | Brand::Dell | Brand::Acer => Score::TWO,
        Brand::Other => Score::ONE,
    }
}

fn score_usage(laptop: &Laptop) -> Score {
    match laptop.usage {
        Usage::Gaming => Score::FOUR,
        Usage::Design | Usage::Coding => Score::THREE,
        Usage::Office => Score::TWO,
    }
}
