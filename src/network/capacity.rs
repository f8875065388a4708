use crate::measure::FlowMeasure;

/// Capacity and flow bookkeeping for the arcs of a residual network.
///
/// The arc space is the doubled layout of
/// [`ResidualGraph`](crate::network::ResidualGraph): arcs `[0, E)` are
/// forward, arcs `[E, 2E)` are reverse, and the transpose of an arc is its
/// partner in the other half. Policies store only as much per-arc state as
/// their capacity model needs.
pub trait CapacityPolicy<F: FlowMeasure> {
    /// Creates the policy state for a network with `num_forward_arcs`
    /// original edges (and twice that many residual arcs), with zero flow
    /// everywhere.
    fn new(num_forward_arcs: usize) -> Self;

    /// The upper capacity of an arc.
    fn arc_capacity(&self, arc: usize) -> F;

    /// The amount of flow in an arc.
    fn arc_flow(&self, arc: usize) -> F;

    /// The residual capacity of an arc: how much additional flow it can
    /// accept.
    fn arc_residual_capacity(&self, arc: usize) -> F;

    /// True when the arc's residual capacity is zero.
    fn is_arc_saturated(&self, arc: usize) -> bool {
        self.arc_residual_capacity(arc).is_zero()
    }

    /// Adds `delta` units of flow to `arc` and removes `delta` units from its
    /// transpose. `delta` must be positive and at most the arc's residual
    /// capacity.
    fn increase_arc_flow(&mut self, arc: usize, delta: F);
}

/// Unit arc capacities: every forward arc carries at most one unit of flow.
///
/// Flow is 0/1, so the whole per-arc state is a saturation bitmap: a forward
/// arc is saturated once its unit is used, a reverse arc is saturated while
/// its transpose carries no flow.
#[derive(Debug, Clone)]
pub struct UnitCapacity {
    saturated: Vec<bool>,
}

impl UnitCapacity {
    fn num_forward_arcs(&self) -> usize {
        self.saturated.len() / 2
    }

    fn transpose(&self, arc: usize) -> usize {
        let num_forward = self.num_forward_arcs();
        if arc < num_forward {
            arc + num_forward
        } else {
            arc - num_forward
        }
    }
}

impl<F: FlowMeasure> CapacityPolicy<F> for UnitCapacity {
    fn new(num_forward_arcs: usize) -> Self {
        // Forward arcs start empty, reverse arcs start with no flow to
        // cancel, hence saturated.
        let mut saturated = vec![false; 2 * num_forward_arcs];
        saturated[num_forward_arcs..].fill(true);
        UnitCapacity { saturated }
    }

    fn arc_capacity(&self, _arc: usize) -> F {
        F::one()
    }

    fn arc_flow(&self, arc: usize) -> F {
        if self.saturated[arc] {
            F::one()
        } else {
            F::zero()
        }
    }

    fn arc_residual_capacity(&self, arc: usize) -> F {
        if self.saturated[arc] {
            F::zero()
        } else {
            F::one()
        }
    }

    fn is_arc_saturated(&self, arc: usize) -> bool {
        self.saturated[arc]
    }

    fn increase_arc_flow(&mut self, arc: usize, delta: F) {
        assert!(!self.saturated[arc], "arc {arc} is saturated");
        assert!(delta == F::one(), "unit-capacity arcs accept exactly one unit");
        let transpose = self.transpose(arc);
        self.saturated[arc] = true;
        self.saturated[transpose] = false;
    }
}

/// Unbounded forward arc capacities.
///
/// Forward arcs are never saturated; flow on them is any non-negative amount.
/// A reverse arc's residual capacity equals the flow in its transpose, so the
/// only per-arc state is one flow value per forward arc.
#[derive(Debug, Clone)]
pub struct Uncapacitated<F> {
    arc_flow: Vec<F>,
}

impl<F> Uncapacitated<F> {
    fn num_forward_arcs(&self) -> usize {
        self.arc_flow.len()
    }
}

impl<F: FlowMeasure> CapacityPolicy<F> for Uncapacitated<F> {
    fn new(num_forward_arcs: usize) -> Self {
        Uncapacitated {
            arc_flow: vec![F::zero(); num_forward_arcs],
        }
    }

    fn arc_capacity(&self, _arc: usize) -> F {
        F::infinity()
    }

    fn arc_flow(&self, arc: usize) -> F {
        if arc < self.num_forward_arcs() {
            self.arc_flow[arc]
        } else {
            F::infinity()
        }
    }

    fn arc_residual_capacity(&self, arc: usize) -> F {
        let num_forward = self.num_forward_arcs();
        if arc < num_forward {
            F::infinity()
        } else {
            self.arc_flow[arc - num_forward]
        }
    }

    fn increase_arc_flow(&mut self, arc: usize, delta: F) {
        assert!(delta > F::zero(), "flow increment must be positive");
        let num_forward = self.num_forward_arcs();
        if arc < num_forward {
            self.arc_flow[arc] += delta;
        } else {
            let forward = arc - num_forward;
            assert!(
                self.arc_flow[forward] >= delta,
                "arc {arc} has insufficient residual capacity"
            );
            self.arc_flow[forward] -= delta;
        }
    }
}
