//! Parallel-array flattening
//!
//! The provider reports each weather element as its own array of time
//! windows, index-aligned across elements. This module merges them
//! into one flat record per window.

use domain::{ElementKind, ForecastRecord, WeatherResponse};

use crate::models::LocationBlock;

/// Flatten a locality block into one record per time window.
///
/// Pure and infallible: the first element's slot count is canonical,
/// and slot *i* of every element is trusted to describe the same
/// window (the upstream invariant; the timestamps are not
/// cross-checked). An element with fewer slots than the canonical
/// count contributes nothing for the missing indices, and element
/// names outside the fixed mapping are skipped. Input order is
/// preserved.
#[must_use]
pub fn normalize(
    block: &LocationBlock,
    dataset_description: &str,
    issue_time: &str,
) -> WeatherResponse {
    let slot_count = block
        .weather_element
        .first()
        .map_or(0, |element| element.time.len());

    let mut forecasts = Vec::with_capacity(slot_count);
    for i in 0..slot_count {
        let reference = &block.weather_element[0].time[i];
        let mut record = ForecastRecord {
            start_time: reference.start_time.clone(),
            end_time: reference.end_time.clone(),
            ..ForecastRecord::default()
        };

        for element in &block.weather_element {
            let Some(kind) = ElementKind::from_element_name(&element.element_name) else {
                continue;
            };
            let Some(slot) = element.time.get(i) else {
                continue;
            };

            let value = &slot.parameter.parameter_name;
            match kind {
                ElementKind::Condition => record.weather = value.clone(),
                ElementKind::RainProbability => record.rain = format!("{value}%"),
                ElementKind::MinTemperature => record.min_temp = format!("{value}°C"),
                ElementKind::MaxTemperature => record.max_temp = format!("{value}°C"),
                ElementKind::ComfortIndex => record.comfort = value.clone(),
            }
        }

        forecasts.push(record);
    }

    WeatherResponse {
        location_name: block.location_name.clone(),
        dataset_description: dataset_description.to_string(),
        update_time: issue_time.to_string(),
        forecasts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Parameter, TimeSlot, WeatherElement};

    const WINDOWS: [(&str, &str); 3] = [
        ("2026-08-05 18:00:00", "2026-08-06 06:00:00"),
        ("2026-08-06 06:00:00", "2026-08-06 18:00:00"),
        ("2026-08-06 18:00:00", "2026-08-07 06:00:00"),
    ];

    fn element(name: &str, values: &[&str]) -> WeatherElement {
        WeatherElement {
            element_name: name.to_string(),
            time: values
                .iter()
                .zip(WINDOWS)
                .map(|(value, (start, end))| TimeSlot {
                    start_time: start.to_string(),
                    end_time: end.to_string(),
                    parameter: Parameter {
                        parameter_name: (*value).to_string(),
                        parameter_unit: None,
                    },
                })
                .collect(),
        }
    }

    fn taipei_block() -> LocationBlock {
        LocationBlock {
            location_name: "臺北市".to_string(),
            weather_element: vec![
                element("Wx", &["多雲時晴", "晴時多雲", "多雲"]),
                element("PoP", &["30", "10", "20"]),
                element("MinT", &["26", "27", "26"]),
                element("MaxT", &["33", "34", "32"]),
                element("CI", &["悶熱", "悶熱", "舒適"]),
            ],
        }
    }

    #[test]
    fn one_record_per_time_window() {
        let response = normalize(&taipei_block(), "三十六小時天氣預報", "2026-08-05 17:00:00");

        assert_eq!(response.location_name, "臺北市");
        assert_eq!(response.dataset_description, "三十六小時天氣預報");
        assert_eq!(response.update_time, "2026-08-05 17:00:00");
        assert_eq!(response.forecasts.len(), 3);

        let first = &response.forecasts[0];
        assert_eq!(first.start_time, "2026-08-05 18:00:00");
        assert_eq!(first.end_time, "2026-08-06 06:00:00");
        assert_eq!(first.weather, "多雲時晴");
        assert_eq!(first.rain, "30%");
        assert_eq!(first.min_temp, "26°C");
        assert_eq!(first.max_temp, "33°C");
        assert_eq!(first.comfort, "悶熱");
        assert!(first.wind_speed.is_empty());
    }

    #[test]
    fn preserves_window_order() {
        let response = normalize(&taipei_block(), "desc", "2026-08-05 17:00:00");
        let starts: Vec<&str> = response
            .forecasts
            .iter()
            .map(|r| r.start_time.as_str())
            .collect();
        assert_eq!(
            starts,
            vec![
                "2026-08-05 18:00:00",
                "2026-08-06 06:00:00",
                "2026-08-06 18:00:00"
            ]
        );
    }

    #[test]
    fn suffixes_applied_to_every_record() {
        let response = normalize(&taipei_block(), "desc", "2026-08-05 17:00:00");
        for record in &response.forecasts {
            assert!(record.rain.ends_with('%'), "rain = {}", record.rain);
            assert!(record.min_temp.ends_with("°C"));
            assert!(record.max_temp.ends_with("°C"));
            assert!(record.wind_speed.is_empty());
        }
    }

    #[test]
    fn unrecognized_elements_are_skipped() {
        let mut block = taipei_block();
        block
            .weather_element
            .push(element("WS", &["5", "6", "4"]));

        let response = normalize(&block, "desc", "2026-08-05 17:00:00");
        assert_eq!(response.forecasts.len(), 3);
        // Wind speed stays empty even when an unmapped element exists
        assert!(response.forecasts.iter().all(|r| r.wind_speed.is_empty()));
    }

    #[test]
    fn short_element_array_skips_missing_slots() {
        let mut block = taipei_block();
        // Drop CI down to one slot; the other windows keep an empty
        // comfort field instead of failing
        block.weather_element[4].time.truncate(1);

        let response = normalize(&block, "desc", "2026-08-05 17:00:00");
        assert_eq!(response.forecasts.len(), 3);
        assert_eq!(response.forecasts[0].comfort, "悶熱");
        assert!(response.forecasts[1].comfort.is_empty());
        assert!(response.forecasts[2].comfort.is_empty());
    }

    #[test]
    fn first_element_sets_the_slot_count() {
        let mut block = taipei_block();
        block.weather_element[0].time.truncate(2);

        let response = normalize(&block, "desc", "2026-08-05 17:00:00");
        assert_eq!(response.forecasts.len(), 2);
    }

    #[test]
    fn block_without_elements_yields_no_records() {
        let block = LocationBlock {
            location_name: "臺北市".to_string(),
            weather_element: vec![],
        };
        let response = normalize(&block, "desc", "2026-08-05 17:00:00");
        assert!(response.forecasts.is_empty());
        assert_eq!(response.location_name, "臺北市");
    }
}
