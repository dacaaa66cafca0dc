//! Override dispatch: every vehicle shares `description()`, and each variant
//! replaces the default `start()` message with its own.

pub trait Vehicle {
    fn make(&self) -> &str;
    fn model(&self) -> &str;

    fn description(&self) -> String {
        format!("{} {}", self.make(), self.model())
    }

    fn start(&self) -> String {
        format!("{}: starting generic vehicle...", self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Identity {
    make: String,
    model: String,
}

impl Identity {
    fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
        }
    }
}

/// Uses the default `start()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericVehicle {
    identity: Identity,
}

impl GenericVehicle {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(make, model),
        }
    }
}

impl Vehicle for GenericVehicle {
    fn make(&self) -> &str {
        &self.identity.make
    }

    fn model(&self) -> &str {
        &self.identity.model
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    identity: Identity,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(make, model),
        }
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        &self.identity.make
    }

    fn model(&self) -> &str {
        &self.identity.model
    }

    fn start(&self) -> String {
        format!("{}: engine roars — car is ready!", self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bike {
    identity: Identity,
}

impl Bike {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(make, model),
        }
    }
}

impl Vehicle for Bike {
    fn make(&self) -> &str {
        &self.identity.make
    }

    fn model(&self) -> &str {
        &self.identity.model
    }

    fn start(&self) -> String {
        format!("{}: pedaling engaged — bike is rolling!", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<Box<dyn Vehicle>> {
        vec![
            Box::new(GenericVehicle::new("Ford", "Transit")),
            Box::new(Car::new("Toyota", "Corolla")),
            Box::new(Bike::new("Trek", "FX 3")),
        ]
    }

    #[test]
    fn test_description_joins_make_and_model() {
        let car = Car::new("Toyota", "Corolla");
        assert_eq!(car.make(), "Toyota");
        assert_eq!(car.model(), "Corolla");
        assert_eq!(car.description(), "Toyota Corolla");
    }

    #[test]
    fn test_generic_vehicle_uses_default_start() {
        let van = GenericVehicle::new("Ford", "Transit");
        assert_eq!(van.start(), "Ford Transit: starting generic vehicle...");
    }

    #[test]
    fn test_car_and_bike_override_start() {
        assert_eq!(
            Car::new("Toyota", "Corolla").start(),
            "Toyota Corolla: engine roars — car is ready!"
        );
        assert_eq!(
            Bike::new("Trek", "FX 3").start(),
            "Trek FX 3: pedaling engaged — bike is rolling!"
        );
    }

    #[test]
    fn test_every_start_contains_description() {
        for vehicle in fleet() {
            assert!(vehicle.start().contains(&vehicle.description()));
        }
    }

    #[test]
    fn test_overrides_differ_from_generic_message() {
        let generic_suffix = ": starting generic vehicle...";
        let overriding: Vec<Box<dyn Vehicle>> =
            vec![Box::new(Car::new("Toyota", "Corolla")), Box::new(Bike::new("Trek", "FX 3"))];
        for vehicle in overriding {
            assert!(!vehicle.start().ends_with(generic_suffix));
        }
    }
}
