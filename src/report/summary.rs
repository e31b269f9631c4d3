use std::collections::HashMap;

use crate::models::MealRecord;

/// Per-group running totals for the breakdown tables.
#[derive(Debug, Default)]
struct GroupStats {
    count: u32,
    students: u64,
    wasted_kg: f64,
    waste_cost: f64,
    satisfaction: f64,
    rate: f64,
}

impl GroupStats {
    fn add(&mut self, record: &MealRecord) {
        self.count += 1;
        self.students += record.students_attended as u64;
        self.wasted_kg += record.food_wasted_kg;
        self.waste_cost += record.waste_cost_rs;
        self.satisfaction += record.student_satisfaction;
        self.rate += record.attendance_rate;
    }

    fn mean_students(&self) -> f64 {
        self.students as f64 / self.count.max(1) as f64
    }

    fn mean_wasted(&self) -> f64 {
        self.wasted_kg / self.count.max(1) as f64
    }
}

/// Print the dataset summary: counts, attendance, waste, cost, and the
/// menu/meal/day breakdowns.
pub fn print_summary(records: &[MealRecord]) {
    if records.is_empty() {
        println!("No records generated.");
        return;
    }

    let first_date = records.first().map(|r| r.date).unwrap_or_default();
    let last_date = records.last().map(|r| r.date).unwrap_or_default();
    let unique_days = {
        let mut days: Vec<_> = records.iter().map(|r| r.date).collect();
        days.dedup();
        days.len()
    };

    println!();
    println!("=== Dataset Summary ===");
    println!();
    println!("Date range: {} to {}", first_date, last_date);
    println!("Total records: {}", records.len());
    println!("Number of days: {}", unique_days);

    // Attendance
    let total_students: u64 = records.iter().map(|r| r.students_attended as u64).sum();
    let max_students = records.iter().map(|r| r.students_attended).max().unwrap_or(0);
    let min_students = records.iter().map(|r| r.students_attended).min().unwrap_or(0);
    let avg_rate: f64 =
        records.iter().map(|r| r.attendance_rate).sum::<f64>() / records.len() as f64;

    println!();
    println!("--- Attendance ---");
    println!(
        "Average students per meal: {:.0}",
        total_students as f64 / records.len() as f64
    );
    println!("Maximum attendance: {}", max_students);
    println!("Minimum attendance: {}", min_students);
    println!("Average attendance rate: {:.1}%", avg_rate);

    // Food waste
    let total_prepared: f64 = records.iter().map(|r| r.food_prepared_kg).sum();
    let total_consumed: f64 = records.iter().map(|r| r.food_consumed_kg).sum();
    let total_wasted: f64 = records.iter().map(|r| r.food_wasted_kg).sum();
    let avg_waste_pct: f64 =
        records.iter().map(|r| r.waste_percentage).sum::<f64>() / records.len() as f64;

    println!();
    println!("--- Food Waste ---");
    println!("Total food prepared: {:.2} kg", total_prepared);
    println!("Total food consumed: {:.2} kg", total_consumed);
    println!("Total food wasted: {:.2} kg", total_wasted);
    println!(
        "Average waste per meal: {:.2} kg",
        total_wasted / records.len() as f64
    );
    println!("Average waste percentage: {:.1}%", avg_waste_pct);

    // Costs
    let total_cost: f64 = records.iter().map(|r| r.total_cost_rs).sum();
    let total_waste_cost: f64 = records.iter().map(|r| r.waste_cost_rs).sum();
    let avg_daily_waste_cost = total_waste_cost / unique_days.max(1) as f64;

    println!();
    println!("--- Costs ---");
    println!("Total cost: Rs {:.2}", total_cost);
    println!("Total waste cost: Rs {:.2}", total_waste_cost);
    println!("Average daily waste cost: Rs {:.2}", avg_daily_waste_cost);
    println!(
        "Potential monthly savings: Rs {:.2}",
        avg_daily_waste_cost * 30.0
    );

    // Menu breakdowns
    let mut by_item: HashMap<&str, GroupStats> = HashMap::new();
    let mut by_meal: HashMap<&str, GroupStats> = HashMap::new();
    let mut by_day: HashMap<&str, GroupStats> = HashMap::new();

    for record in records {
        by_item.entry(&record.menu_item).or_default().add(record);
        by_meal.entry(record.meal_type.as_str()).or_default().add(record);
        by_day.entry(&record.day_of_week).or_default().add(record);
    }

    let mut popular: Vec<_> = by_item.iter().collect();
    popular.sort_by(|a, b| {
        b.1.mean_students()
            .partial_cmp(&a.1.mean_students())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    println!();
    println!("--- Most Popular Menu Items ---");
    for (i, (item, stats)) in popular.iter().take(5).enumerate() {
        println!(
            "{}. {} - {:.0} students avg, satisfaction {:.1}/5.0",
            i + 1,
            item,
            stats.mean_students(),
            stats.satisfaction / stats.count.max(1) as f64
        );
    }

    let mut wasteful: Vec<_> = by_item.iter().collect();
    wasteful.sort_by(|a, b| {
        b.1.mean_wasted()
            .partial_cmp(&a.1.mean_wasted())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    println!();
    println!("--- Highest Waste Items ---");
    for (i, (item, stats)) in wasteful.iter().take(5).enumerate() {
        println!("{}. {}: {:.2} kg average waste", i + 1, item, stats.mean_wasted());
    }

    println!();
    println!("--- Meal Type Comparison ---");
    for slot in ["Breakfast", "Lunch", "Dinner"] {
        if let Some(stats) = by_meal.get(slot) {
            println!(
                "{:<9} - {:.0} students avg, {:.2} kg waste avg, Rs {:.2} waste cost avg",
                slot,
                stats.mean_students(),
                stats.mean_wasted(),
                stats.waste_cost / stats.count.max(1) as f64
            );
        }
    }

    let mut day_pattern: Vec<_> = by_day.iter().collect();
    day_pattern.sort_by(|a, b| {
        let rate_a = a.1.rate / a.1.count.max(1) as f64;
        let rate_b = b.1.rate / b.1.count.max(1) as f64;
        rate_b.partial_cmp(&rate_a).unwrap_or(std::cmp::Ordering::Equal)
    });

    println!();
    println!("--- Day-wise Attendance Pattern ---");
    for (day, stats) in day_pattern {
        println!("{}: {:.1}%", day, stats.rate / stats.count.max(1) as f64);
    }
    println!();
}

/// Pretty-print records as an aligned preview table.
pub fn display_records(records: &[MealRecord]) {
    if records.is_empty() {
        println!("No records to display.");
        return;
    }

    println!();
    println!("=== Preview ({} records) ===", records.len());
    println!();

    let max_item_len = records.iter().map(|r| r.menu_item.len()).max().unwrap_or(10);

    for record in records {
        println!(
            "{} {:<9} {:<width$} {:<6} {:>5.1}C | {:>3} students ({:>5.2}%) | {:>6.2} kg wasted",
            record.date,
            record.meal_type.as_str(),
            record.menu_item,
            record.weather.as_str(),
            record.temperature_c,
            record.students_attended,
            record.attendance_rate,
            record.food_wasted_kg,
            width = max_item_len
        );
    }

    println!();
}
