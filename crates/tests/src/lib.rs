#[cfg(test)]
mod common;

#[cfg(test)]
mod notification_hub_tests;

#[cfg(test)]
mod notification_rest_tests;
