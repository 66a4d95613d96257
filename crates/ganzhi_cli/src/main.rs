use std::fmt::Display;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ganzhi_base::{
    ALL_ELEMENTS, ALL_JIAZI, CompassDirection, Gender, annual_pillars, balance_index,
    pillar_from_index, score_chart,
};
use ganzhi_rs::{ProfileConfig, ProfileRequest, compute_profile};
use ganzhi_search::{chart_for_birth, luck_cycles_for_chart, solar_terms_for_year};
use ganzhi_time::{BirthTime, DayBoundary, datetime_from_jd};
use ganzhi_yijing::{CastResult, LineValue, cast_from_lines, cast_hexagram};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ganzhi", about = "BaZi four pillars, luck cycles and I Ching CLI")]
struct Cli {
    /// JSON config file; command-line flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// UTC birth instant (RFC 3339, e.g. 2024-02-10T04:00:00Z)
    birth: String,
    /// Local offset from UTC in minutes (config default when omitted)
    #[arg(long, allow_hyphen_values = true)]
    tz: Option<i32>,
    /// Day-start hour: 0 (midnight) or 23 (Zi hour)
    #[arg(long)]
    day_start: Option<i64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full profile as JSON
    Profile {
        #[command(flatten)]
        birth: BirthArgs,
        /// male or female
        #[arg(long)]
        gender: String,
        /// Number of luck cycles (1-12)
        #[arg(long)]
        cycles: Option<usize>,
        /// Include a hexagram cast
        #[arg(long)]
        hexagram: bool,
        /// RNG seed for the hexagram cast
        #[arg(long)]
        seed: Option<u64>,
        /// Year to read the hexagram against (default: current year)
        #[arg(long, allow_hyphen_values = true)]
        insight_year: Option<i32>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Four pillars and element scores
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Luck cycles (DaYun)
    Luck {
        #[command(flatten)]
        birth: BirthArgs,
        /// male or female
        #[arg(long)]
        gender: String,
        /// Number of cycles (1-12)
        #[arg(long)]
        count: Option<usize>,
    },
    /// The 24 solar terms of a year (UTC)
    Terms {
        /// Gregorian year (1901-2100)
        year: i32,
    },
    /// Cast a hexagram, or evaluate given line values
    Hexagram {
        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
        /// Six line values bottom to top, e.g. 7,8,9,6,7,8
        #[arg(long, value_delimiter = ',')]
        lines: Option<Vec<u8>>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Annual pillars (LiuNian)
    Years {
        /// First Gregorian year
        #[arg(allow_hyphen_values = true)]
        start: i32,
        /// Number of years (1-1000)
        #[arg(long, default_value = "10")]
        span: i64,
    },
    /// Compass direction and element for a bearing
    Direction {
        /// Bearing in degrees clockwise from north
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
    },
    /// One sexagenary pair by index, or the full table
    Jiazi {
        /// Cycle index (reduced mod 60)
        #[arg(allow_hyphen_values = true)]
        index: Option<i64>,
    },
}

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn load_config(path: Option<&PathBuf>) -> ProfileConfig {
    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading config");
            or_exit(ProfileConfig::load(p))
        }
        None => ProfileConfig::default(),
    }
}

fn birth_time(args: &BirthArgs, config: &ProfileConfig) -> BirthTime {
    let boundary = or_exit(DayBoundary::from_start_hour(
        args.day_start.unwrap_or(config.default_day_start_hour),
    ));
    or_exit(BirthTime::parse(
        &args.birth,
        args.tz.unwrap_or(config.default_tz_offset_minutes),
        boundary,
    ))
}

fn parse_gender(s: &str) -> Gender {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid gender: {e}");
        eprintln!("Valid: male, female");
        std::process::exit(1);
    })
}

fn print_cast(cast: &CastResult) {
    let values: Vec<String> = cast.lines.iter().map(|l| l.value().to_string()).collect();
    println!("Lines (bottom to top): {}", values.join(" "));
    let original = cast.original.info();
    println!(
        "Original: {} #{} {} {} ({})",
        original.symbol, original.number, original.chinese, original.pinyin, original.name
    );
    if cast.has_changes() {
        let relating = cast.relating.info();
        println!("Changing: {:?}", cast.changing_positions);
        println!(
            "Relating: {} #{} {} {} ({})",
            relating.symbol, relating.number, relating.chinese, relating.pinyin, relating.name
        );
    } else {
        println!("No changing lines");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    match cli.command {
        Commands::Profile {
            birth,
            gender,
            cycles,
            hexagram,
            seed,
            insight_year,
            compact,
        } => {
            let mut config = config;
            if let Some(n) = cycles {
                config.luck_cycle_count = n;
            }
            if hexagram {
                config.include_hexagram = true;
            }
            if seed.is_some() {
                config.hexagram_seed = seed;
            }
            if insight_year.is_some() {
                config.insight_year = insight_year;
            }
            let request = ProfileRequest {
                birth_instant_utc: Some(birth.birth),
                gender: Some(gender),
                tz_offset_minutes: birth.tz,
                day_start_hour_local: birth.day_start,
            };
            let profile = or_exit(compute_profile(&request, &config));
            let json = if compact {
                serde_json::to_string(&profile)
            } else {
                serde_json::to_string_pretty(&profile)
            };
            println!("{}", or_exit(json));
        }

        Commands::Chart { birth } => {
            let birth = birth_time(&birth, &config);
            let info = or_exit(chart_for_birth(&birth));
            println!("Chart: {}", info.chart);
            for p in info.chart.pillars() {
                println!(
                    "  {:<5} {}  [{}]",
                    p.role.name(),
                    p.jiazi.display_label(),
                    p.jiazi.cycle_index()
                );
            }
            println!(
                "Effective year: {}  Solar month: {} (from {} {}, {})",
                info.effective_year,
                info.solar_month,
                info.month_jie.term.name(),
                info.month_jie.term.chinese(),
                info.month_jie.utc
            );
            let dm = info.chart.day_master();
            println!(
                "Day master: {} {} ({} {})",
                dm.chinese(),
                dm.name(),
                dm.polarity().name(),
                dm.element().name()
            );
            let vector = score_chart(&info.chart);
            let shares = vector.normalized();
            for e in ALL_ELEMENTS {
                println!(
                    "  {:<5} {:>5.2}  ({:>5.1}%)",
                    e.name(),
                    vector.get(e),
                    shares.get(e) * 100.0
                );
            }
            println!("Balance index: {:.2}", balance_index(&vector));
        }

        Commands::Luck {
            birth,
            gender,
            count,
        } => {
            let birth = birth_time(&birth, &config);
            let gender = parse_gender(&gender);
            let info = or_exit(chart_for_birth(&birth));
            let set = or_exit(luck_cycles_for_chart(
                &birth,
                &info,
                gender,
                count.unwrap_or(config.luck_cycle_count),
            ));
            println!(
                "Direction: {} (measured to {} at {})",
                set.direction.name(),
                set.boundary.term.name(),
                set.boundary.utc
            );
            println!(
                "Start age: {} ({}y {}m, exact {:.3})",
                set.start_age.base_age,
                set.start_age.years,
                set.start_age.months,
                set.start_age.years_exact
            );
            for c in &set.cycles {
                let start = or_exit(datetime_from_jd(c.start_jd));
                println!(
                    "  #{:<2} ages {:>3}-{:<3} {}  from {}",
                    c.index,
                    c.start_age,
                    c.end_age,
                    c.pillar.display_label(),
                    start.date_naive()
                );
            }
        }

        Commands::Terms { year } => {
            let events = or_exit(solar_terms_for_year(year));
            for ev in events {
                println!(
                    "{:>2} {} {:<22} {:>5.1}°  {}{}",
                    ev.term.index(),
                    ev.term.chinese(),
                    ev.term.name(),
                    ev.term.longitude_deg(),
                    ev.utc.format("%Y-%m-%d %H:%M UTC"),
                    if ev.term.is_jie() { "  (Jie)" } else { "" }
                );
            }
        }

        Commands::Hexagram { seed, lines, json } => {
            let cast = match lines {
                Some(values) => {
                    let parsed: Vec<LineValue> = values
                        .into_iter()
                        .map(|v| or_exit(LineValue::from_value(v)))
                        .collect();
                    let arr: [LineValue; 6] = parsed.try_into().unwrap_or_else(|v: Vec<_>| {
                        eprintln!("Expected 6 line values, got {}", v.len());
                        std::process::exit(1);
                    });
                    cast_from_lines(arr)
                }
                None => {
                    let mut rng = match seed.or(config.hexagram_seed) {
                        Some(s) => StdRng::seed_from_u64(s),
                        None => StdRng::from_entropy(),
                    };
                    cast_hexagram(&mut rng)
                }
            };
            if json {
                println!("{}", or_exit(serde_json::to_string_pretty(&cast)));
            } else {
                print_cast(&cast);
            }
        }

        Commands::Years { start, span } => {
            for y in or_exit(annual_pillars(start, span)) {
                println!(
                    "{}  {}  {}",
                    y.year,
                    y.pillar.display_label(),
                    y.pillar.branch().animal()
                );
            }
        }

        Commands::Direction { bearing } => match CompassDirection::from_bearing(bearing) {
            Some(d) => println!(
                "{} ({}) - {} ({:.1} deg center)",
                d.name(),
                d.abbrev(),
                d.element().name(),
                d.bearing()
            ),
            None => {
                eprintln!("Invalid bearing: {bearing}");
                std::process::exit(1);
            }
        },

        Commands::Jiazi { index } => match index {
            Some(i) => {
                let jz = pillar_from_index(i);
                println!(
                    "{} [{}] - {} {}",
                    jz.display_label(),
                    jz.cycle_index(),
                    jz.element().name(),
                    jz.branch().animal()
                );
            }
            None => {
                for jz in ALL_JIAZI {
                    println!("{:>2}  {}", jz.cycle_index(), jz.display_label());
                }
            }
        },
    }
}
