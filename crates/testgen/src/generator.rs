use chrono::{DateTime, Duration, Local};
use hubreach_core::DiGraph;
use rand::distr::{Distribution, Uniform};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
pub struct NetParams {
    pub id: u64,
    pub n_airport: u64,
    pub n_route: u64,
}

/// A generated route network together with the parameters and wall-clock
/// window that produced it.
#[derive(Deserialize, Serialize, Debug)]
pub struct Network {
    params: NetParams,
    info: String,
    start: DateTime<Local>,
    end: DateTime<Local>,
    routes: Vec<(u64, u64)>,
}

impl Network {
    #[must_use]
    pub const fn new(
        params: NetParams,
        info: String,
        start: DateTime<Local>,
        end: DateTime<Local>,
        routes: Vec<(u64, u64)>,
    ) -> Self {
        Self {
            params,
            info,
            start,
            end,
            routes,
        }
    }

    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_routes(&self) -> &Vec<(u64, u64)> {
        &self.routes
    }

    #[must_use]
    pub const fn get_params(&self) -> &NetParams {
        &self.params
    }

    #[must_use]
    pub fn get_cloned_params(&self) -> NetParams {
        self.params.clone()
    }

    #[must_use]
    pub fn get_duration(&self) -> Duration {
        self.end - self.start
    }

    /// Builds the route graph. Airports that no route touches are not
    /// part of it.
    #[must_use]
    pub fn to_graph(&self) -> DiGraph<u64> {
        self.routes.iter().copied().collect()
    }
}

/// Generate `n_route` directed routes between airports `0..n_airport`,
/// with both endpoints drawn uniformly at random.
///
/// Self-loops and repeated routes are possible, as in real inputs. Returns
/// no routes when `n_airport` is zero.
#[must_use]
pub fn generate_single_network(n_airport: u64, n_route: u64) -> Vec<(u64, u64)> {
    let Ok(airport_range) = Uniform::new(0, n_airport) else {
        return Vec::new();
    };
    let mut random_generator = rand::rng();

    (0..n_route)
        .map(|_| {
            let origin = airport_range.sample(&mut random_generator);
            let destination = airport_range.sample(&mut random_generator);
            (origin, destination)
        })
        .collect()
}

#[must_use]
pub fn generate_mult_networks(n_net: u64, n_airport: u64, n_route: u64) -> Vec<Network> {
    (0..n_net)
        .into_par_iter()
        .map(|i_net| {
            let start_time = Local::now();
            let routes = generate_single_network(n_airport, n_route);
            let end_time = Local::now();
            Network {
                params: NetParams::builder()
                    .id(i_net)
                    .n_airport(n_airport)
                    .n_route(n_route)
                    .build(),
                info: "generated".to_string(),
                start: start_time,
                end: end_time,
                routes,
            }
        })
        .collect()
}
