use std::io::{stdin, IsTerminal as _};
use std::time::Instant;

use criteria_ranking::Ranked;
use laptop_ranking::{
    rank_standard, rank_usage, sample_fleet, standard_weights, usage_weights, Laptop,
};
use ordered_float::NotNan;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom as _;
use rand::SeedableRng as _;

const SHUFFLE_ROUNDS: usize = 1_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let fleet = read_fleet();
    let weights = standard_weights();
    let baseline = rank_standard(&fleet, &weights).expect("standard ranking");
    let reference = signature(&baseline);

    // Re-rank the same fleet in shuffled input orders: the (name, total)
    // multiset must not depend on input order.
    let mut rng = SmallRng::from_entropy();
    let mut shuffled = fleet.clone();
    let mut total_ranking_μs = 0;
    for _ in 0..SHUFFLE_ROUNDS {
        shuffled.shuffle(&mut rng);
        let t0 = Instant::now();
        let ranking = rank_standard(&shuffled, &weights).expect("standard ranking");
        total_ranking_μs += Instant::now().duration_since(t0).as_micros();
        assert_eq!(
            reference,
            signature(&ranking),
            "ranking depends on input order"
        );
    }
    println!(
        "avg_ranking_μs: {}",
        total_ranking_μs as f64 / SHUFFLE_ROUNDS as f64
    );

    print_ranking("hardware catalog", &baseline);
    let usage_ranking = rank_usage(&fleet, &usage_weights()).expect("usage ranking");
    print_ranking("usage catalog", &usage_ranking);
}

fn read_fleet() -> Vec<Laptop> {
    let header = "name,price,ram,processor,storage,gpu,portability,battery,brand,usage";
    if stdin().is_terminal() {
        return sample_fleet();
    }
    let fleet: Vec<Laptop> = stdin()
        .lines()
        .filter_map(|line| {
            let line = line.unwrap();
            if line.is_empty() || line.starts_with(header) {
                return None;
            }
            let fields = line.split(',').collect::<Vec<&str>>();
            Some(Laptop {
                name: fields[0].to_owned(),
                price: fields[1].parse().expect("price"),
                ram: fields[2].parse().expect("ram"),
                processor: fields[3].parse().expect("processor"),
                storage: fields[4].parse().expect("storage"),
                gpu: fields[5].parse().expect("gpu"),
                portability: fields[6].parse().expect("portability"),
                battery: fields[7].parse().expect("battery"),
                brand: fields[8].parse().expect("brand"),
                usage: fields[9].parse().expect("usage"),
            })
        })
        .collect();
    if fleet.is_empty() {
        sample_fleet()
    } else {
        fleet
    }
}

fn signature(ranking: &[Ranked<'_, Laptop>]) -> Vec<(String, NotNan<f64>)> {
    let mut entries: Vec<(String, NotNan<f64>)> = ranking
        .iter()
        .map(|entry| (entry.alternative.name.clone(), entry.total))
        .collect();
    entries.sort();
    entries
}

fn print_ranking(label: &str, ranking: &[Ranked<'_, Laptop>]) {
    println!("--- {label} ---");
    println!("rank,name,brand,usage,price,total");
    for (position, entry) in ranking.iter().enumerate() {
        let laptop = entry.alternative;
        println!(
            "{},{},{},{},{},{:.3}",
            position + 1,
            laptop.name,
            laptop.brand,
            laptop.usage,
            laptop.price,
            entry.total.into_inner()
        );
    }
    if let Some(best) = ranking.first() {
        println!(
            "best_recommendation: {} ({}) total {:.3}",
            best.alternative.name,
            best.alternative.brand,
            best.total.into_inner()
        );
    }
}
