#[cfg(test)]
pub mod test_graph {

    use std::cmp::Ordering;
    use std::collections::BinaryHeap;

    use crate::{
        constants::MAX_WEIGHT,
        edge_direction::EdgeDirection,
        geometry::compute_geometry_distance,
        geopoint::GeoPoint,
        graph_edge::GraphEdge,
        meters::Meters,
        node_access::{NodeAccess, NodeId},
        weighting::{Weight, Weighting},
    };

    #[derive(Debug, Clone)]
    pub struct TestEdge {
        pub start_node: NodeId,
        pub end_node: NodeId,
        pub distance: Meters,
        pub geometry: Vec<GeoPoint>,
        pub sampled_geometry: Option<Vec<GeoPoint>>,
        pub forward_speed: f64,
        pub backward_speed: f64,
        pub unfavored: bool,
    }

    impl TestEdge {
        pub fn new(
            start_node: NodeId,
            end_node: NodeId,
            distance: Meters,
            geometry: Vec<GeoPoint>,
            speed: f64,
        ) -> Self {
            TestEdge {
                start_node,
                end_node,
                distance,
                geometry,
                sampled_geometry: None,
                forward_speed: speed,
                backward_speed: speed,
                unfavored: false,
            }
        }

        /// Stored distance matches the length of the geometry
        pub fn from_geometry(
            start_node: NodeId,
            end_node: NodeId,
            geometry: Vec<GeoPoint>,
            speed: f64,
        ) -> Self {
            let distance = compute_geometry_distance(&geometry);
            TestEdge::new(start_node, end_node, distance, geometry, speed)
        }

        pub fn with_forward_speed(mut self, speed: f64) -> Self {
            self.forward_speed = speed;
            self
        }

        pub fn with_backward_speed(mut self, speed: f64) -> Self {
            self.backward_speed = speed;
            self
        }

        pub fn with_sampled_geometry(mut self, sampled_geometry: Vec<GeoPoint>) -> Self {
            self.sampled_geometry = Some(sampled_geometry);
            self
        }

        pub fn unfavored(mut self) -> Self {
            self.unfavored = true;
            self
        }

        /// Direction to traverse the edge when leaving `node`
        pub fn direction_from(&self, node: NodeId) -> EdgeDirection {
            if self.start_node == node {
                return EdgeDirection::Forward;
            }

            if self.end_node == node {
                return EdgeDirection::Backward;
            }

            panic!("Node {} is neither the start nor the end of the edge", node)
        }

        pub fn adj_node(&self, node: NodeId) -> NodeId {
            if self.start_node == node {
                self.end_node
            } else {
                self.start_node
            }
        }
    }

    impl GraphEdge for TestEdge {
        fn distance(&self) -> Meters {
            self.distance
        }

        fn geometry(&self) -> &[GeoPoint] {
            &self.geometry
        }

        fn sampled_geometry(&self) -> &[GeoPoint] {
            self.sampled_geometry.as_deref().unwrap_or(&self.geometry)
        }

        fn speed(&self, direction: EdgeDirection) -> f64 {
            match direction {
                EdgeDirection::Forward => self.forward_speed,
                EdgeDirection::Backward => self.backward_speed,
            }
        }

        fn is_unfavored(&self) -> bool {
            self.unfavored
        }
    }

    #[derive(Debug)]
    struct HeapItem {
        node_id: NodeId,
        weight: Weight,
    }

    impl PartialEq for HeapItem {
        fn eq(&self, other: &Self) -> bool {
            self.cmp(other) == Ordering::Equal
        }
    }

    impl Eq for HeapItem {}

    impl PartialOrd for HeapItem {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for HeapItem {
        fn cmp(&self, other: &Self) -> Ordering {
            // Flip weight to make this a min-heap
            other
                .weight
                .total_cmp(&self.weight)
                .then_with(|| self.node_id.cmp(&other.node_id))
        }
    }

    pub struct TestGraph {
        nodes: Vec<GeoPoint>,
        edges: Vec<TestEdge>,
        adjacency_list: Vec<Vec<usize>>,
    }

    impl TestGraph {
        pub fn new() -> Self {
            TestGraph {
                nodes: Vec::new(),
                edges: Vec::new(),
                adjacency_list: Vec::new(),
            }
        }

        /// 4x4 grid of hilly nodes roughly 100 m apart, a few one-way and slow
        /// edges, and some edges bending through an extra point.
        pub fn create_hill_graph() -> Self {
            let mut graph = TestGraph::new();
            let size = 4;

            for row in 0..size {
                for col in 0..size {
                    let elevation = 40.0 + 6.0 * (row as f64) - 4.0 * ((col * col) as f64)
                        + if (row + col) % 3 == 0 { 9.0 } else { 0.0 };

                    graph.add_node(GeoPoint::with_elevation(
                        51.5 + 0.0009 * row as f64,
                        -0.15 + 0.0014 * col as f64,
                        elevation,
                    ));
                }
            }

            let speeds = [5.0, 10.0, 15.0];
            for row in 0..size {
                for col in 0..size {
                    let node = row * size + col;
                    let speed = speeds[(row + 2 * col) % speeds.len()];

                    if col + 1 < size {
                        let edge = graph.add_edge(node, node + 1, speed);
                        if (row + col) % 4 == 1 {
                            graph.edges[edge].backward_speed = 0.0;
                        }
                    }

                    if row + 1 < size {
                        if (row + col) % 2 == 0 {
                            graph.add_bent_edge(node, node + size, speed);
                        } else {
                            graph.add_edge(node, node + size, speed);
                        }
                    }
                }
            }

            // Diagonal shortcut
            graph.add_edge(0, size + 1, 15.0);

            graph
        }

        pub fn add_node(&mut self, point: GeoPoint) -> NodeId {
            self.nodes.push(point);
            self.adjacency_list.push(Vec::new());
            self.nodes.len() - 1
        }

        pub fn add_edge(&mut self, start_node: NodeId, end_node: NodeId, speed: f64) -> usize {
            let geometry = vec![self.nodes[start_node], self.nodes[end_node]];
            self.push_edge(TestEdge::from_geometry(
                start_node, end_node, geometry, speed,
            ))
        }

        /// Edge going through a point offset from the straight line between its nodes
        pub fn add_bent_edge(
            &mut self,
            start_node: NodeId,
            end_node: NodeId,
            speed: f64,
        ) -> usize {
            let start = self.nodes[start_node];
            let end = self.nodes[end_node];
            let via = GeoPoint::new(
                (start.lat + end.lat) / 2.0,
                (start.lng + end.lng) / 2.0 + 0.0003,
            );

            let geometry = vec![start, via, end];
            self.push_edge(TestEdge::from_geometry(
                start_node, end_node, geometry, speed,
            ))
        }

        fn push_edge(&mut self, edge: TestEdge) -> usize {
            let edge_id = self.edges.len();
            self.adjacency_list[edge.start_node].push(edge_id);
            self.adjacency_list[edge.end_node].push(edge_id);
            self.edges.push(edge);
            edge_id
        }

        pub fn node_count(&self) -> usize {
            self.nodes.len()
        }

        pub fn edges(&self) -> &[TestEdge] {
            &self.edges
        }

        /// Optimal weight from every node to `goal`, `MAX_WEIGHT` when unreachable
        pub fn shortest_weights_to(&self, goal: NodeId, weighting: &impl Weighting) -> Vec<Weight> {
            let mut weights = vec![MAX_WEIGHT; self.node_count()];
            let mut settled = vec![false; self.node_count()];
            let mut heap = BinaryHeap::new();

            weights[goal] = 0.0;
            heap.push(HeapItem {
                node_id: goal,
                weight: 0.0,
            });

            while let Some(HeapItem { node_id, weight }) = heap.pop() {
                if settled[node_id] {
                    continue;
                }
                settled[node_id] = true;

                for &edge_id in &self.adjacency_list[node_id] {
                    let edge = &self.edges[edge_id];
                    let from = edge.adj_node(node_id);
                    let edge_weight = weighting
                        .calc_edge_weight(edge, edge.direction_from(from))
                        .unwrap();

                    let candidate = weight + edge_weight;
                    if candidate < weights[from] {
                        weights[from] = candidate;
                        heap.push(HeapItem {
                            node_id: from,
                            weight: candidate,
                        });
                    }
                }
            }

            weights
        }
    }

    impl NodeAccess for TestGraph {
        fn node_geometry(&self, node: NodeId) -> GeoPoint {
            self.nodes[node]
        }
    }
}
