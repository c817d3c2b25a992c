//! Text rendering of strength and varga results.

use std::collections::BTreeMap;
use std::fmt::Write;

use bala_vedic_base::{
    ALL_GRAHAS, Chart, Graha, GrahaDrishtiMatrix, HouseStrength, ShadbalaResult, Varga,
    rashi_from_longitude,
};

/// One row per graha with the six component totals.
pub fn shadbala_table(results: &BTreeMap<Graha, ShadbalaResult>, p: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>6}",
        "Graha", "Sthana", "Dig", "Kala", "Chesta", "Nais", "Drik", "Total", "Reqd", "Strong"
    );
    let _ = writeln!(out, "{}", "-".repeat(88));
    for r in results.values() {
        let _ = writeln!(
            out,
            "{:<8} {:>8.p$} {:>8.p$} {:>8.p$} {:>8.p$} {:>8.p$} {:>8.p$} {:>8.p$} {:>8} {:>6}",
            r.graha.english_name(),
            r.sthana.total,
            r.dig,
            r.kala.total,
            r.chesta,
            r.naisargika,
            r.drik,
            r.total,
            required(r, p),
            if r.is_strong { "Yes" } else { "No" },
        );
    }
    out
}

fn required(r: &ShadbalaResult, p: usize) -> String {
    r.required_strength
        .map_or_else(|| "-".to_string(), |v| format!("{v:.p$}"))
}

/// Full breakdown for one graha.
pub fn shadbala_detail(r: &ShadbalaResult, p: usize) -> String {
    let mut out = String::new();
    let s = &r.sthana;
    let k = &r.kala;
    let rows: [(&str, f64); 21] = [
        ("  Sthana Bala:     ", s.total),
        ("    Uchcha:        ", s.uchcha),
        ("    Saptavargaja:  ", s.saptavargaja),
        ("    Ojayugma:      ", s.ojayugma),
        ("    Drekkana:      ", s.drekkana),
        ("    Kendradi:      ", s.kendradi),
        ("  Dig Bala:        ", r.dig),
        ("  Kala Bala:       ", k.total),
        ("    Natonnata:     ", k.natonnata),
        ("    Paksha:        ", k.paksha),
        ("    Tribhaga:      ", k.tribhaga),
        ("    Vara:          ", k.vara),
        ("    Masa:          ", k.masa),
        ("    Varsha:        ", k.varsha),
        ("    Hora:          ", k.hora),
        ("    Ayana:         ", k.ayana),
        ("  Chesta Bala:     ", r.chesta),
        ("  Naisargika Bala: ", r.naisargika),
        ("  Drik Bala:       ", r.drik),
        ("  Total:           ", r.total),
        ("  Rupas:           ", r.total_rupas),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{label}{value:>8.p$}");
    }
    let _ = writeln!(out, "  Required:        {:>8}", required(r, p));
    let _ = writeln!(
        out,
        "  Strong:          {}",
        if r.is_strong { "Yes" } else { "No" }
    );
    let _ = writeln!(out, "  Category:        {}", r.category.name());
    let _ = writeln!(out, "  Day phase:       {:?}", k.day_phase_source);
    out
}

pub fn bhava_table(houses: &BTreeMap<u8, HouseStrength>, p: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:<10} {:<8} {:>8} {:>8} {:>8} {:>8}  {}",
        "House", "Rashi", "Lord", "Lord", "Kendra", "Drishti", "Total", "Category"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));
    for h in houses.values() {
        let _ = writeln!(
            out,
            "{:>5} {:<10} {:<8} {:>8.p$} {:>8.p$} {:>8.p$} {:>8.p$}  {}",
            h.house,
            h.rashi.name(),
            h.lord.english_name(),
            h.lord_strength,
            h.kendradi,
            h.drishti,
            h.total,
            h.category.name(),
        );
    }
    out
}

/// Placements in a divisional chart.
pub fn varga_table(chart: &Chart, varga: Varga, p: usize) -> String {
    let mut out = String::new();
    let asc = rashi_from_longitude(chart.ascendant());
    let _ = writeln!(out, "{} ({})", varga.name(), varga.sanskrit_name());
    let _ = writeln!(
        out,
        "  {:<8} {:<10} {:>8.p$}",
        "Lagna",
        asc.rashi.name(),
        asc.degrees_in_rashi
    );
    for (g, info) in chart.planets() {
        let r = rashi_from_longitude(info.longitude());
        let _ = writeln!(
            out,
            "  {:<8} {:<10} {:>8.p$}  H{:<2} {}{}",
            g.english_name(),
            r.rashi.name(),
            r.degrees_in_rashi,
            info.house,
            info.dignity.name(),
            if info.is_combust { " (combust)" } else { "" },
        );
    }
    out
}

/// Source rows, target columns, virupas.
pub fn drishti_table(matrix: &GrahaDrishtiMatrix, p: usize) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<8}", "");
    for t in ALL_GRAHAS {
        let _ = write!(out, " {:>7}", t.name());
    }
    let _ = writeln!(out);
    for s in ALL_GRAHAS {
        let _ = write!(out, "{:<8}", s.name());
        for t in ALL_GRAHAS {
            let _ = write!(out, " {:>7.p$}", matrix.get(s, t).virupa);
        }
        let _ = writeln!(out);
    }
    out
}
