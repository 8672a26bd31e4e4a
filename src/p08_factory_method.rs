// Pattern 8: Factory Method - Creators with a Template Method
// Each logistics creator knows how to produce exactly one transport type;
// the shared plan_delivery template uses whatever it gets uniformly.

use colored::Colorize;

// ============================================================================
// Product trait and concrete products
// ============================================================================

trait Transport {
    fn deliver(&self) -> String;
}

struct Truck;
impl Transport for Truck {
    fn deliver(&self) -> String {
        "Delivering by land in a box".to_string()
    }
}

struct Ship;
impl Transport for Ship {
    fn deliver(&self) -> String {
        "Delivering by sea in a container".to_string()
    }
}

// ============================================================================
// Creator trait with the template method
// ============================================================================

trait Logistics {
    fn create_transport(&self) -> Box<dyn Transport>;

    // Template method: identical for every creator, parameterized only by
    // the factory method above.
    fn plan_delivery(&self) -> String {
        let transport = self.create_transport();
        transport.deliver()
    }
}

struct RoadLogistics;
impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

struct SeaLogistics;
impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_logistics_delivers_by_land() {
        assert_eq!(RoadLogistics.plan_delivery(), "Delivering by land in a box");
    }

    #[test]
    fn test_sea_logistics_delivers_by_sea() {
        assert_eq!(
            SeaLogistics.plan_delivery(),
            "Delivering by sea in a container"
        );
    }

    #[test]
    fn test_template_matches_product_output() {
        // plan_delivery adds nothing beyond the created transport's text.
        assert_eq!(RoadLogistics.plan_delivery(), Truck.deliver());
        assert_eq!(SeaLogistics.plan_delivery(), Ship.deliver());
    }

    #[test]
    fn test_creators_work_through_trait_object() {
        let creators: Vec<Box<dyn Logistics>> =
            vec![Box::new(RoadLogistics), Box::new(SeaLogistics)];
        let plans: Vec<String> = creators.iter().map(|c| c.plan_delivery()).collect();
        assert_eq!(
            plans,
            vec![
                "Delivering by land in a box",
                "Delivering by sea in a container"
            ]
        );
    }
}

fn main() {
    println!("{}", "=== Factory Method ===".bold());

    let logistics: Box<dyn Logistics> = Box::new(RoadLogistics);
    println!("{}", logistics.plan_delivery());

    let logistics: Box<dyn Logistics> = Box::new(SeaLogistics);
    println!("{}", logistics.plan_delivery());
}
