use crate::estimator::Estimate;

const COLUMNS: [(&str, usize); 7] = [
    ("Timestamp", 12),
    ("Latitude", 10),
    ("Longitude", 11),
    ("Diff_Lon", 11),
    ("Diff_Lat", 11),
    ("Distance(km)", 13),
    ("Speed(km/hr)", 14),
];

/// Renders the records as a fixed-width table followed by the average speed.
pub fn render_summary(estimate: &Estimate) -> String {
    let header = COLUMNS.iter().map(|(name, width)| format!("{:>width$}", name, width = width)).collect::<Vec<_>>();

    let rows = estimate.records.iter().enumerate().map(|(i, record)| {
        let interval = record.interval;
        let cells = [
            record.sample.timestamp.to_string(),
            format!("{:.4}", record.sample.latitude),
            format!("{:.4}", record.sample.longitude),
            undefined_or(interval.map(|interval| interval.delta_longitude_rad), 6),
            undefined_or(interval.map(|interval| interval.delta_latitude_rad), 6),
            undefined_or(record.distance_km(), 3),
            undefined_or(record.speed_kmh(), 3),
        ];

        let row = cells
            .iter()
            .zip(COLUMNS)
            .map(|(cell, (_, width))| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>();
        format!("{:>4} {}", i, row.join(" "))
    });

    let lines = ["".to_string(), "-------- Response Data --------".to_string(), "".to_string()]
        .into_iter()
        .chain(std::iter::once(format!("{:>4} {}", "", header.join(" "))))
        .chain(rows)
        .chain(std::iter::once(format!("Average Speed of ISS is : {}", estimate.average_speed)))
        .collect::<Vec<_>>();

    lines.join("\n")
}

fn undefined_or(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{:.precision$}", value, precision = precision))
}
