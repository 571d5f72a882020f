use anyhow::{Context, Result};

const FIRST_YEAR: i32 = 1900;
const LAST_YEAR: i32 = 2020;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Births per year for a name peaking around `peak_year`.
fn generate_counts(
    years: &[i32],
    (peak_year, spread, amplitude): (f64, f64, f64),
    rng: &mut SimpleRng,
) -> Vec<u64> {
    years
        .iter()
        .map(|&year| {
            let signal = gaussian(year as f64, peak_year, spread, amplitude);
            let noisy = signal + rng.gauss(0.0, signal.sqrt().max(1.0));
            noisy.round().max(0.0) as u64
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// (name, peak year, spread in years, peak births per year)
const NAMES: &[(&str, f64, f64, f64)] = &[
    ("JAN", 1945.0, 25.0, 9000.0),
    ("JAN KAREL", 1935.0, 10.0, 120.0),
    ("JAN-PAVEL", 1990.0, 8.0, 40.0),
    ("JOSEF", 1925.0, 20.0, 8000.0),
    ("JIŘÍ", 1950.0, 12.0, 9500.0),
    ("PETR", 1965.0, 10.0, 9000.0),
    ("PAVEL", 1960.0, 12.0, 7000.0),
    ("MARTIN", 1978.0, 9.0, 8500.0),
    ("TOMÁŠ", 1985.0, 9.0, 8000.0),
    ("JAKUB", 2005.0, 10.0, 6000.0),
    ("ADAM", 2012.0, 10.0, 4000.0),
    ("VÁCLAV", 1915.0, 20.0, 6000.0),
    ("FRANTIŠEK", 1912.0, 18.0, 7000.0),
    ("LUKÁŠ", 1992.0, 7.0, 5500.0),
    ("ONDŘEJ", 1995.0, 9.0, 4000.0),
    ("MARIE", 1915.0, 18.0, 12000.0),
    ("ANNA", 1920.0, 15.0, 5000.0),
    ("ANNA MARIE", 1930.0, 8.0, 90.0),
    ("JANA", 1955.0, 11.0, 9000.0),
    ("EVA", 1950.0, 12.0, 7000.0),
    ("HANA", 1958.0, 10.0, 6000.0),
    ("PETRA", 1978.0, 8.0, 7500.0),
    ("LENKA", 1977.0, 8.0, 7000.0),
    ("MARTINA", 1973.0, 8.0, 6500.0),
    ("LUCIE", 1990.0, 8.0, 5500.0),
    ("KATEŘINA", 1988.0, 10.0, 5000.0),
    ("TEREZA", 1996.0, 8.0, 5000.0),
    ("ELIŠKA", 2014.0, 8.0, 4500.0),
    ("DAGMAR", 1945.0, 8.0, 2500.0),
    ("NIKOL", 2000.0, 5.0, 1500.0),
    ("RUŽENA", 1912.0, 10.0, 3000.0),
    ("BOHUMIL", 1918.0, 12.0, 3000.0),
    ("ALENA", 1952.0, 10.0, 4000.0),
    ("ZDENĚK", 1940.0, 15.0, 4500.0),
];

/// Names listed in the register without a single recorded birth.
const EMPTY_NAMES: &[&str] = &["KVĚTOSLAV-IVO", "XAVERIE"];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let years: Vec<i32> = (FIRST_YEAR..=LAST_YEAR).collect();

    let mut rows: Vec<(&str, Vec<u64>)> = NAMES
        .iter()
        .map(|&(name, mu, sigma, amp)| {
            (name, generate_counts(&years, (mu, sigma, amp), &mut rng))
        })
        .collect();
    rows.extend(EMPTY_NAMES.iter().map(|&name| (name, vec![0; years.len()])));

    let mut year_totals = vec![0u64; years.len()];
    for (_, counts) in &rows {
        for (slot, count) in year_totals.iter_mut().zip(counts) {
            *slot += count;
        }
    }
    let grand_total: u64 = year_totals.iter().sum();

    let output_path = "names.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;

    let mut header = vec!["JMÉNO".to_string()];
    header.extend(years.iter().map(|y| y.to_string()));
    header.extend(["".to_string(), "SOUČET".to_string()]);
    writer.write_record(&header)?;

    writer.write_record(count_row("SOUČET", &year_totals, grand_total))?;
    for (name, counts) in &rows {
        let total = counts.iter().sum();
        writer.write_record(count_row(name, counts, total))?;
    }
    writer.flush().context("writing names.csv")?;

    println!(
        "Wrote {} names over {FIRST_YEAR}-{LAST_YEAR} ({grand_total} births) to {output_path}",
        rows.len()
    );
    Ok(())
}

fn count_row(label: &str, counts: &[u64], total: u64) -> Vec<String> {
    let mut row = vec![label.to_string()];
    row.extend(counts.iter().map(|c| c.to_string()));
    row.push(String::new());
    row.push(total.to_string());
    row
}
