//! Integration tests for Shadbala and Bhava Bala over full charts.

use std::collections::BTreeMap;

use bala_vedic_base::{
    ALL_GRAHAS, BhavaCategory, Chart, DayPhaseSource, Dignity, DignityMode, GeoLocation, Graha,
    HouseSystem, PlanetPosition, ShadbalaConfig, ShadbalaResult, StrengthCategory, SunEvents,
    calculate_house_strength, calculate_shadbala, calculate_shadbala_with, rashi_lord,
};
use chrono::{DateTime, TimeZone, Utc};

const EPS: f64 = 1e-9;

fn utc_2024_jan_15() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

fn new_delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.2090, 0.0)
}

fn pos(graha: Graha, lon: f64, speed: f64, decl: f64) -> PlanetPosition {
    let mut p = PlanetPosition::at_longitude(graha, lon, utc_2024_jan_15());
    p.longitude_speed = speed;
    p.declination = decl;
    p
}

fn fixture_positions() -> Vec<PlanetPosition> {
    vec![
        pos(Graha::Surya, 270.6, 1.017, -21.1),
        pos(Graha::Chandra, 335.2, 13.5, -8.0),
        pos(Graha::Mangal, 250.4, 0.75, -23.5),
        pos(Graha::Buddh, 242.8, 1.2, -21.0),
        pos(Graha::Guru, 11.5, 0.05, 7.8),
        pos(Graha::Shukra, 222.3, 1.23, -19.4),
        pos(Graha::Shani, 309.6, 0.11, -15.2),
        pos(Graha::Rahu, 351.0, -0.05, 0.0),
    ]
}

fn fixture_events() -> SunEvents {
    SunEvents {
        sunrise: Utc.with_ymd_and_hms(2024, 1, 15, 1, 45, 0).unwrap(),
        sunset: Utc.with_ymd_and_hms(2024, 1, 15, 12, 10, 0).unwrap(),
        next_sunrise: Utc.with_ymd_and_hms(2024, 1, 16, 1, 45, 0).unwrap(),
    }
}

fn fixture_chart() -> Chart {
    Chart::builder(utc_2024_jan_15(), new_delhi())
        .houses(HouseSystem::whole_sign(71.0))
        .planets(fixture_positions())
        .sun_events(Some(fixture_events()))
        .build()
        .unwrap()
}

fn chart_with(positions: Vec<PlanetPosition>) -> Chart {
    Chart::builder(utc_2024_jan_15(), new_delhi())
        .houses(HouseSystem::whole_sign(71.0))
        .planets(positions)
        .sun_events(Some(fixture_events()))
        .build()
        .unwrap()
}

fn replace(graha: Graha, lon: f64, speed: f64) -> Vec<PlanetPosition> {
    fixture_positions()
        .into_iter()
        .map(|p| {
            if p.graha == graha {
                pos(graha, lon, speed, p.declination)
            } else {
                p
            }
        })
        .collect()
}

#[test]
fn shadbala_every_graha_valid() {
    let result = calculate_shadbala(&fixture_chart());
    assert_eq!(result.len(), 9);

    for g in ALL_GRAHAS {
        let r = &result[&g];
        assert_eq!(r.graha, g);
        let sum = r.sthana.total + r.dig + r.kala.total + r.chesta + r.naisargika + r.drik;
        assert!((r.total - sum).abs() < EPS, "{}", g.name());
        assert!((r.total_rupas - r.total / 60.0).abs() < EPS);
        assert_eq!(r.required_strength.is_some(), g.is_sapta());
        assert_eq!(r.is_strong, r.required_strength.is_some_and(|req| r.total >= req));
        assert_eq!(r.category, StrengthCategory::from_total(r.total));

        assert!((0.0..=60.0).contains(&r.sthana.uchcha));
        assert!((0.0..=420.0).contains(&r.sthana.saptavargaja));
        assert!((0.0..=60.0).contains(&r.dig));
        assert!((0.0..=60.0).contains(&r.chesta));
        assert!((-60.0..=60.0).contains(&r.drik));
        assert!((0.0..=60.0).contains(&r.kala.ayana));
        assert_eq!(r.kala.day_phase_source, DayPhaseSource::SunEvents);
    }
}

#[test]
fn nodes_scored_on_house_motion_and_aspect() {
    let chart = Chart::builder(utc_2024_jan_15(), new_delhi())
        .houses(HouseSystem::whole_sign(71.0))
        .planets([
            pos(Graha::Surya, 270.6, 1.017, -21.1),
            pos(Graha::Chandra, 335.2, 13.5, -8.0),
            pos(Graha::Rahu, 351.0, -0.05, 0.0),
        ])
        .sun_events(Some(fixture_events()))
        .build()
        .unwrap();
    let result = calculate_shadbala(&chart);
    assert_eq!(
        result.keys().copied().collect::<Vec<_>>(),
        vec![Graha::Surya, Graha::Chandra, Graha::Rahu, Graha::Ketu]
    );

    // Rahu in Meena = house 10 from Mithuna, Ketu in Kanya = house 4
    let rahu = &result[&Graha::Rahu];
    let ketu = &result[&Graha::Ketu];
    assert_eq!(rahu.sthana.kendradi, 60.0);
    assert_eq!(ketu.sthana.kendradi, 60.0);
    assert_eq!(rahu.chesta, 60.0);
    assert_eq!(ketu.chesta, 60.0);

    for node in [rahu, ketu] {
        assert_eq!(node.sthana.uchcha, 0.0);
        assert_eq!(node.sthana.saptavargaja, 0.0);
        assert_eq!(node.sthana.ojayugma, 0.0);
        assert_eq!(node.sthana.drekkana, 0.0);
        assert!(node.sthana.saptavarga_dignities.is_none());
        assert_eq!(node.dig, 0.0);
        assert_eq!(node.kala.total, 0.0);
        assert_eq!(node.naisargika, 0.0);
        assert!(node.required_strength.is_none());
        assert!(!node.is_strong);
        let sum = node.sthana.total + node.chesta + node.drik;
        assert!((node.total - sum).abs() < EPS);
    }

    // Ketu sits 195.8 past the Moon: 15.8 of orb on the full aspect.
    // The Sun is out of orb.
    let moon_on_ketu = 60.0 * (1.0 - 15.8 / 30.0) / 4.0;
    assert!((ketu.drik - moon_on_ketu).abs() < 1e-6);
}

#[test]
fn shadbala_is_deterministic() {
    let chart = fixture_chart();
    assert_eq!(calculate_shadbala(&chart), calculate_shadbala(&chart));
}

#[test]
fn monday_daytime_lords() {
    let result = calculate_shadbala(&fixture_chart());
    // 2024-01-15 is a Monday
    assert_eq!(result[&Graha::Chandra].kala.vara, 45.0);
    assert_eq!(result[&Graha::Surya].kala.vara, 0.0);
    // Daytime: Sun, Jupiter, Saturn and Mercury get natonnata
    assert_eq!(result[&Graha::Surya].kala.natonnata, 60.0);
    assert_eq!(result[&Graha::Buddh].kala.natonnata, 60.0);
    assert_eq!(result[&Graha::Chandra].kala.natonnata, 0.0);
    // Sun in Makara: Saturn is masa lord
    assert_eq!(result[&Graha::Shani].kala.masa, 30.0);
    // Exactly one graha holds each of vara, masa, varsha, hora
    let picks: [fn(&ShadbalaResult) -> f64; 4] = [
        |r| r.kala.vara,
        |r| r.kala.masa,
        |r| r.kala.varsha,
        |r| r.kala.hora,
    ];
    for pick in picks {
        assert_eq!(result.values().filter(|r| pick(r) > 0.0).count(), 1);
    }
}

#[test]
fn exalted_sun_gets_full_uchcha() {
    let chart = chart_with(replace(Graha::Surya, 10.0, 1.0));
    let sun = calculate_shadbala(&chart)[&Graha::Surya];
    assert!((sun.sthana.uchcha - 60.0).abs() < EPS);
    assert_eq!(sun.sthana.saptavarga_dignities.unwrap()[0], Dignity::Exalted);
    assert!(sun.sthana.saptavargaja >= 60.0);
    assert_eq!(sun.chesta, 0.0);
}

#[test]
fn debilitated_sun_gets_no_uchcha() {
    let chart = chart_with(replace(Graha::Surya, 190.0, 1.0));
    let sun = calculate_shadbala(&chart)[&Graha::Surya];
    assert!(sun.sthana.uchcha.abs() < EPS);
    assert_eq!(sun.sthana.saptavarga_dignities.unwrap()[0], Dignity::Debilitated);
}

#[test]
fn retrograde_jupiter_full_chesta() {
    let chart = chart_with(replace(Graha::Guru, 11.5, -0.08));
    let jup = calculate_shadbala(&chart)[&Graha::Guru];
    assert_eq!(jup.chesta, 60.0);
}

#[test]
fn stationary_saturn_no_chesta() {
    let chart = chart_with(replace(Graha::Shani, 309.6, 0.001));
    assert_eq!(calculate_shadbala(&chart)[&Graha::Shani].chesta, 0.0);
}

#[test]
fn missing_planet_is_omitted() {
    let positions = fixture_positions()
        .into_iter()
        .filter(|p| p.graha != Graha::Shukra)
        .collect();
    let result = calculate_shadbala(&chart_with(positions));
    assert_eq!(result.len(), 8);
    assert!(!result.contains_key(&Graha::Shukra));
}

#[test]
fn missing_moon_zeroes_paksha() {
    let positions = fixture_positions()
        .into_iter()
        .filter(|p| p.graha != Graha::Chandra)
        .collect();
    let result = calculate_shadbala(&chart_with(positions));
    for r in result.values() {
        assert_eq!(r.kala.paksha, 0.0);
    }
}

#[test]
fn no_sun_events_uses_house_heuristic() {
    let chart = Chart::builder(utc_2024_jan_15(), new_delhi())
        .houses(HouseSystem::whole_sign(71.0))
        .planets(fixture_positions())
        .build()
        .unwrap();
    let result = calculate_shadbala(&chart);
    assert_eq!(result.len(), 9);
    for r in result.values() {
        assert_eq!(r.kala.day_phase_source, DayPhaseSource::HouseHeuristic);
    }
}

#[test]
fn degree_aware_mode_reaches_moolatrikona() {
    // Sun at 15 Simha: own sign by sign, moolatrikona by degree
    let chart = chart_with(replace(Graha::Surya, 135.0, 1.0));
    let sign_only = calculate_shadbala(&chart)[&Graha::Surya];
    let config = ShadbalaConfig {
        dignity_mode: DignityMode::DegreeAware,
        ..ShadbalaConfig::default()
    };
    let degree_aware = calculate_shadbala_with(&chart, &config)[&Graha::Surya];
    assert_eq!(sign_only.sthana.saptavarga_dignities.unwrap()[0], Dignity::OwnSign);
    assert_eq!(
        degree_aware.sthana.saptavarga_dignities.unwrap()[0],
        Dignity::MoolaTrikona
    );
    assert!(degree_aware.sthana.saptavargaja > sign_only.sthana.saptavargaja);
}

#[test]
fn house_strength_twelve_houses() {
    let chart = fixture_chart();
    let shadbala = calculate_shadbala(&chart);
    let houses = calculate_house_strength(&chart, &shadbala);
    assert_eq!(houses.len(), 12);
    for (&h, s) in &houses {
        assert!((1..=12).contains(&h));
        assert_eq!(s.lord, rashi_lord(s.rashi));
        assert!((s.lord_strength - shadbala[&s.lord].total).abs() < EPS);
        assert!((s.total - (s.lord_strength + s.kendradi + s.drishti)).abs() < EPS);
    }
}

#[test]
fn house_strength_monotone_in_lord_strength() {
    let chart = fixture_chart();
    let shadbala = calculate_shadbala(&chart);
    let before = calculate_house_strength(&chart, &shadbala);

    let mut boosted: BTreeMap<_, _> = shadbala.clone();
    if let Some(r) = boosted.get_mut(&Graha::Guru) {
        r.total += 25.0;
    }
    let after = calculate_house_strength(&chart, &boosted);

    for h in 1..=12u8 {
        let delta = after[&h].total - before[&h].total;
        if before[&h].lord == Graha::Guru {
            assert!((delta - 25.0).abs() < EPS);
        } else {
            assert!(delta.abs() < EPS);
        }
    }
}

#[test]
fn house_strength_monotone_in_kendradi() {
    let shadbala = calculate_shadbala(&fixture_chart());
    let uniform: BTreeMap<_, _> = shadbala
        .into_iter()
        .map(|(g, mut r)| {
            r.total = 100.0;
            (g, r)
        })
        .collect();
    // No grahas, so no drishti on any cusp
    let empty = chart_with(Vec::new());
    let houses = calculate_house_strength(&empty, &uniform);

    for a in houses.values() {
        assert_eq!(a.drishti, 0.0);
        assert_eq!(a.lord_strength, 100.0);
        for b in houses.values() {
            if a.kendradi > b.kendradi {
                assert!(a.total > b.total, "house {} vs {}", a.house, b.house);
                assert!(a.category >= b.category);
            }
        }
    }
    assert_eq!(houses[&1].category, BhavaCategory::AtiShadbalapurna);
    assert_eq!(houses[&3].category, BhavaCategory::Shadbalardha);
}

#[test]
fn house_strength_monotone_in_drishti() {
    let chart = fixture_chart();
    let shadbala = calculate_shadbala(&chart);
    let before = calculate_house_strength(&chart, &shadbala);

    // Jupiter opposite the 1st cusp (60) casts a full aspect on it
    let moved = chart_with(replace(Graha::Guru, 240.0, 0.05));
    let after = calculate_house_strength(&moved, &shadbala);

    let (b, a) = (&before[&1], &after[&1]);
    assert_eq!(a.lord_strength, b.lord_strength);
    assert_eq!(a.kendradi, b.kendradi);
    assert!((a.drishti - b.drishti - 15.0).abs() < EPS);
    assert!((a.total - b.total - 15.0).abs() < EPS);
    assert!(a.category >= b.category);
}
