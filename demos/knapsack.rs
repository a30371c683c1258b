//! Example: knapsack value and item selection, coin change and LIS.
//!
//! Run with:
//! `cargo run --example knapsack`

use contest_kit::problems::{
    coin_change::coin_change, knapsack::knapsack_selection, lis::lis_length,
};

fn main() {
    let weights = [12, 2, 1, 1, 4];
    let values = [4, 2, 1, 2, 10];

    match knapsack_selection(15, &weights, &values) {
        Ok((value, items)) => {
            println!("Best value: {value}");
            println!("Items: {items:?}");
        }
        Err(err) => eprintln!("knapsack: {err}"),
    }

    match coin_change(&[1, 2, 5], 11) {
        Ok(Some(n)) => println!("11 from {{1, 2, 5}} needs {n} coins"),
        Ok(None) => println!("11 cannot be formed"),
        Err(err) => eprintln!("coin_change: {err}"),
    }

    println!("LIS length: {}", lis_length(&[10, 9, 2, 5, 3, 7, 101, 18]));
}
