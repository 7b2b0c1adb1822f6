//! Development set — used for inspection while tuning. The optimizer never
//! sees this data.

use super::Example;

pub fn devset() -> Vec<Example> {
    vec![
        Example::new(
            "Deep Learning",
            "Deep learning is a subset of machine learning that uses neural networks with \
             multiple layers to model complex patterns in data.",
        )
        .with_inputs(&["term"]),
        Example::new(
            "Cloud Computing",
            "Cloud computing is the delivery of computing services including servers, \
             storage, databases, networking, software, and analytics over the Internet.",
        )
        .with_inputs(&["term"]),
    ]
}
