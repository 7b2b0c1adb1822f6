//! Training set — the examples the bootstrap optimizer may select as
//! few-shot demonstrations.

use super::Example;

pub fn trainset() -> Vec<Example> {
    vec![
        Example::new(
            "API",
            "An API, or Application Programming Interface, is a set of rules and protocols \
             that allows different software applications to communicate with each other. It \
             defines how requests and responses should be formatted, and what actions can be \
             performed, enabling developers to integrate and utilize functionalities from \
             other services or platforms without needing to understand their internal \
             workings.",
        )
        .with_inputs(&["term"]),
        Example::new(
            "Neural Network",
            "A neural network is a computational model inspired by the structure and function \
             of the human brain. It consists of layers of interconnected nodes, or neurons, \
             that process and transmit information. Neural networks are widely used in \
             artificial intelligence and machine learning for tasks such as image \
             recognition, natural language processing, and predictive modeling.",
        )
        .with_inputs(&["term"]),
    ]
}
