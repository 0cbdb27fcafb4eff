use proptest::prelude::{prop, Strategy};
use proptest::{prop_assert, prop_compose, proptest};

use criteria_ranking::num::assert_within;

use crate::*;

fn scenario_fleet() -> Vec<Laptop> {
    let base = |name: &str, price, ram, processor, gpu, kg, hours| Laptop {
        name: name.to_owned(),
        price,
        ram,
        processor,
        storage: Storage::Ssd512,
        gpu,
        portability: Portability::from_kg(kg),
        battery: Battery::from_hours(hours),
        brand: Brand::Other,
        usage: Usage::Office,
    };
    vec![
        base("A", 6_000_000, Ram::Gb8, Processor::I3, Gpu::Integrated, 2.6, 3.0),
        base("B", 15_000_000, Ram::Gb16, Processor::I7, Gpu::Rtx, 1.8, 7.0),
        base("C", 25_000_000, Ram::Gb32, Processor::I9, Gpu::HighEnd, 1.2, 9.0),
    ]
}

#[test]
fn benefit_criteria_outweigh_cheapest_price() {
    let fleet = scenario_fleet();
    let ranking = rank_standard(&fleet, &standard_weights()).unwrap();
    let order: Vec<&str> = ranking
        .iter()
        .map(|entry| entry.alternative.name.as_str())
        .collect();
    assert_eq!(order, ["C", "B", "A"]);
    assert_within(ranking[0].total.into_inner(), 0.775, 1e-12);
    assert_within(ranking[1].total.into_inner(), 0.6625, 1e-12);
    assert_within(ranking[2].total.into_inner(), 0.55, 1e-12);
}

#[test]
fn sample_fleet_standard_ranking() {
    let fleet = sample_fleet();
    let ranking = rank_standard(&fleet, &standard_weights()).unwrap();
    let order: Vec<&str> = ranking
        .iter()
        .map(|entry| entry.alternative.name.as_str())
        .collect();
    assert_eq!(order, ["Asus Zenbook 14", "Lenovo Legion 5", "MacBook Air M2"]);
    assert_within(ranking[0].total.into_inner(), 0.90, 1e-12);
    assert_within(ranking[1].total.into_inner(), 0.80, 1e-12);
    assert_within(ranking[2].total.into_inner(), 0.7916666666666667, 1e-12);
}

#[test]
fn identical_machines_tie_in_input_order() {
    let mut first = sample_fleet().swap_remove(0);
    first.name = "Twin 1".to_owned();
    let mut second = first.clone();
    second.name = "Twin 2".to_owned();

    let fleet = vec![first, second];
    let ranking = rank_standard(&fleet, &standard_weights()).unwrap();
    assert_eq!(ranking[0].total, ranking[1].total);
    assert_eq!(ranking[0].alternative.name, "Twin 1");
    assert_eq!(ranking[1].alternative.name, "Twin 2");
}

#[test]
fn preset_weights_sum_to_one() {
    assert_within(standard_weights().sum(), 1.0, 1e-9);
    assert_within(usage_weights().sum(), 1.0, 1e-9);
}

#[test]
fn presets_cover_their_catalogs() {
    let fleet = sample_fleet();
    assert!(rank_standard(&fleet, &standard_weights()).is_ok());
    assert!(rank_usage(&fleet, &usage_weights()).is_ok());
}

#[test]
fn preset_and_catalog_must_agree() {
    let fleet = sample_fleet();
    assert_eq!(
        rank_usage(&fleet, &standard_weights()).unwrap_err(),
        RankingError::UnknownCriterion("storage".to_owned()),
    );
    assert_eq!(
        rank_standard(&fleet, &usage_weights()).unwrap_err(),
        RankingError::UnknownCriterion("brand".to_owned()),
    );
}

#[test]
fn usage_catalog_prefers_matching_workload() {
    let mut office = sample_fleet().swap_remove(0);
    office.name = "Office twin".to_owned();
    office.usage = Usage::Office;
    let mut gaming = office.clone();
    gaming.name = "Gaming twin".to_owned();
    gaming.usage = Usage::Gaming;

    let fleet = vec![office, gaming];
    let ranking = rank_usage(&fleet, &usage_weights()).unwrap();
    assert_eq!(ranking[0].alternative.name, "Gaming twin");
    assert!(ranking[0].total > ranking[1].total);
}

#[test]
fn unknown_labels_are_rejected() {
    let err = "Pentium II".parse::<Processor>().unwrap_err();
    assert_eq!(
        err,
        UnknownValue {
            attribute: "processor",
            value: "Pentium II".to_owned(),
        }
    );
    assert_eq!(
        err.to_string(),
        "unrecognized processor value \"Pentium II\""
    );
    assert!("64GB".parse::<Ram>().is_err());
    assert!("SSD 2TB".parse::<Storage>().is_err());
}

#[test]
fn unlisted_brands_fall_back_to_other() {
    assert_eq!("Samsung".parse::<Brand>().unwrap(), Brand::Other);
    assert_eq!("Asus".parse::<Brand>().unwrap(), Brand::Asus);
}

#[test]
fn intake_json_uses_catalog_labels() {
    let laptop: Laptop = serde_json::from_value(serde_json::json!({
        "name": "HP Pavilion 14",
        "price": 10_000_000,
        "ram": "16GB",
        "processor": "Intel i5 / Ryzen 5",
        "storage": "SSD 512GB",
        "gpu": "Integrated",
        "portability": "1.5-2kg",
        "battery": "6-8h",
        "brand": "HP",
        "usage": "Coding"
    }))
    .unwrap();
    assert_eq!(laptop.ram, Ram::Gb16);
    assert_eq!(laptop.portability, Portability::Light);
    assert_eq!(laptop.brand, Brand::Hp);
    assert_eq!(
        serde_json::to_value(&laptop.processor).unwrap(),
        serde_json::json!("Intel i5 / Ryzen 5")
    );
}

#[test]
fn weight_configs_deserialize_from_plain_numbers() {
    let weights: Weights =
        serde_json::from_value(serde_json::json!({ "price": 0.6, "ram": 0.4 })).unwrap();
    assert_within(weights.sum(), 1.0, 1e-12);
    assert!(serde_json::from_value::<Weights>(serde_json::json!({ "price": -0.1 })).is_err());
}

#[test]
fn raw_measurements_bucket_into_classes() {
    assert_eq!(Portability::from_kg(2.6), Portability::Heavy);
    assert_eq!(Portability::from_kg(2.5), Portability::Midweight);
    assert_eq!(Portability::from_kg(1.5), Portability::Light);
    assert_eq!(Portability::from_kg(1.4), Portability::Ultralight);

    assert_eq!(Battery::from_hours(3.0), Battery::Short);
    assert_eq!(Battery::from_hours(4.0), Battery::Medium);
    assert_eq!(Battery::from_hours(7.5), Battery::Long);
    assert_eq!(Battery::from_hours(9.0), Battery::AllDay);
}

fn pick<T: Copy + std::fmt::Debug + 'static>(values: &'static [T]) -> impl Strategy<Value = T> {
    (0..values.len()).prop_map(move |index| values[index])
}

prop_compose! {
    fn laptop()(
        price in 0..40_000_000_u64,
        ram in pick(Ram::ALL),
        processor in pick(Processor::ALL),
        storage in pick(Storage::ALL),
        gpu in pick(Gpu::ALL),
        portability in pick(Portability::ALL),
        battery in pick(Battery::ALL),
        brand in pick(Brand::ALL),
        usage in pick(Usage::ALL),
    ) -> Laptop {
        Laptop {
            name: format!("laptop-{price}"),
            price,
            ram,
            processor,
            storage,
            gpu,
            portability,
            battery,
            brand,
            usage,
        }
    }
}
prop_compose! {
    fn fleet()(laptops in prop::collection::vec(laptop(), 1..10)) -> Vec<Laptop> {
        laptops
    }
}

proptest! {
    #[test]
    fn raising_price_never_improves_the_total(
        fleet in fleet(),
        subject in 0..10_usize,
        bump in 0..30_000_000_u64,
    ) {
        let subject = subject % fleet.len();
        let weights = standard_weights();
        let baseline = rank_standard(&fleet, &weights).unwrap();
        let baseline_total = baseline
            .iter()
            .find(|entry| std::ptr::eq(entry.alternative, &fleet[subject]))
            .unwrap()
            .total;

        let mut raised_fleet = fleet.clone();
        raised_fleet[subject].price += bump;
        prop_assert!(score_price(&raised_fleet[subject]) <= score_price(&fleet[subject]));

        let raised = rank_standard(&raised_fleet, &weights).unwrap();
        let raised_total = raised
            .iter()
            .find(|entry| std::ptr::eq(entry.alternative, &raised_fleet[subject]))
            .unwrap()
            .total;
        prop_assert!(raised_total <= baseline_total);
    }
}
