pub mod counting;
pub mod factorial;
pub mod primality;
pub mod reversal;
pub mod stats;

pub use counting::CountingDemo;
pub use factorial::FactorialDemo;
pub use primality::PrimalityDemo;
pub use reversal::ReversalDemo;
pub use stats::StatsDemo;

use crate::config::DemoConfig;
use crate::domain::ports::Demo;

/// 依配置建立五個示範步驟，順序即執行順序
pub fn build_demos(config: &DemoConfig) -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(FactorialDemo::new(config.factorial_input)),
        Box::new(PrimalityDemo::new(config.prime_candidate)),
        Box::new(ReversalDemo::new(config.message.clone())),
        Box::new(CountingDemo::new(config.count_from, config.count_to)),
        Box::new(StatsDemo::new(config.samples.clone())),
    ]
}
