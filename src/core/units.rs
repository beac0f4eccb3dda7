use crate::domain::model::TemperatureUnit;

pub fn convert_temperature(temp: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => temp * 9.0 / 5.0 + 32.0,
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (temp - 32.0) * 5.0 / 9.0,
        _ => temp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_to_fahrenheit() {
        assert_eq!(
            convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
            32.0
        );
        assert_eq!(
            convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
            212.0
        );
    }

    #[test]
    fn fahrenheit_to_celsius() {
        assert_eq!(
            convert_temperature(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
            0.0
        );
    }

    #[test]
    fn same_unit_is_identity() {
        assert_eq!(
            convert_temperature(21.5, TemperatureUnit::Celsius, TemperatureUnit::Celsius),
            21.5
        );
    }
}
