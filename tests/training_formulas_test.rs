use fitness_tracker::models::training::constants::{running, M_IN_KM, MIN_IN_H};
use fitness_tracker::{read_package, Training, TrainingSummary};
use proptest::prelude::*;

/// Parse the numeric fields of a summary line back out, in template order
fn parse_message_figures(message: &str) -> Vec<f64> {
    message
        .trim_end_matches('.')
        .split("; ")
        .skip(1)
        .map(|field| {
            field
                .split_whitespace()
                .find_map(|token| token.parse::<f64>().ok())
                .unwrap_or_else(|| panic!("no number in field {field:?}"))
        })
        .collect()
}

#[test]
fn test_end_to_end_swimming() {
    let summary = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .unwrap()
        .show_training_info();

    assert_eq!(summary.speed, 1.0);
    assert!((summary.calories - 336.0).abs() < 1e-9);
    assert_eq!(
        summary.get_message(),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[test]
fn test_end_to_end_running() {
    let summary = read_package("RUN", &[15000.0, 1.0, 75.0])
        .unwrap()
        .show_training_info();

    assert!((summary.distance - 9.75).abs() < 1e-9);
    assert!((summary.speed - 9.75).abs() < 1e-9);
    assert!((summary.calories - 797.805).abs() < 1e-9);
}

#[test]
fn test_end_to_end_walking() {
    let summary = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
        .unwrap()
        .show_training_info();

    assert_eq!(
        summary.get_message(),
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252."
    );
}

#[test]
fn test_parse_message_figures() {
    let summary = TrainingSummary {
        training_type: "Running",
        duration: 0.75,
        distance: 7.5,
        speed: 10.0,
        calories: 612.3456,
    };

    assert_eq!(
        parse_message_figures(&summary.get_message()),
        vec![0.75, 7.5, 10.0, 612.346]
    );
}

proptest! {
    #[test]
    fn running_calories_follow_formula(
        action in 0.0f64..100_000.0,
        duration in 0.01f64..10.0,
        weight in 1.0f64..200.0,
    ) {
        let training = Training::running(action, duration, weight).unwrap();
        let speed = action * running::LEN_STEP / M_IN_KM / duration;
        let calories = (running::CALORIES_MEAN_SPEED_MULTIPLIER * speed
            + running::CALORIES_MEAN_SPEED_SHIFT)
            * weight
            / M_IN_KM
            * duration
            * MIN_IN_H;

        prop_assert!((training.mean_speed() - speed).abs() <= 1e-9 * speed.max(1.0));
        prop_assert!((training.spent_calories() - calories).abs() <= 1e-9 * calories.max(1.0));
    }

    #[test]
    fn swimming_speed_is_independent_of_action(
        action_a in 0.0f64..10_000.0,
        action_b in 0.0f64..10_000.0,
        duration in 0.01f64..5.0,
        pool_length in 10.0f64..100.0,
        pool_count in 0.0f64..200.0,
    ) {
        let a = Training::swimming(action_a, duration, 70.0, pool_length, pool_count).unwrap();
        let b = Training::swimming(action_b, duration, 70.0, pool_length, pool_count).unwrap();
        let expected = pool_length * pool_count / M_IN_KM / duration;

        prop_assert_eq!(a.mean_speed(), b.mean_speed());
        prop_assert!((a.mean_speed() - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    #[test]
    fn formatted_figures_round_to_three_decimals(
        action in 0.0f64..50_000.0,
        duration in 0.1f64..5.0,
        weight in 30.0f64..150.0,
        height in 120.0f64..220.0,
    ) {
        let summary = Training::walking(action, duration, weight, height)
            .unwrap()
            .show_training_info();
        let figures = parse_message_figures(&summary.get_message());
        let originals = [summary.duration, summary.distance, summary.speed, summary.calories];

        prop_assert_eq!(figures.len(), 4);
        for (parsed, original) in figures.iter().zip(originals) {
            prop_assert!((parsed - original).abs() <= 0.0005 + 1e-9 * original.abs());
        }
    }
}
