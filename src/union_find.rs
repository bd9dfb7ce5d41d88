/// Disjoint-set forest over the indices `0..n`, with union by size and path compression.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn components(&self) -> usize {
        self.components
    }

    /// The representative of the class containing `x`.
    ///
    /// # Panics
    ///
    /// When `x >= self.len()`
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point everything on the path directly at the root.
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the classes of `x` and `y`. Returns false if they were already merged.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let (child, parent) = if self.size[root_x] >= self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.components -= 1;
        true
    }

    /// Union every element of `items` into one class.
    pub fn union_all(&mut self, items: &[usize]) {
        if let Some((&first, rest)) = items.split_first() {
            for &other in rest {
                self.union(first, other);
            }
        }
    }

    /// The classes as lists of indices, each sorted, ordered by their smallest index.
    pub fn classes(&mut self) -> Vec<Vec<usize>> {
        let mut slot = vec![usize::MAX; self.len()];
        let mut classes: Vec<Vec<usize>> = Vec::with_capacity(self.components);
        for x in 0..self.len() {
            let root = self.find(x);
            if slot[root] == usize::MAX {
                slot[root] = classes.len();
                classes.push(Vec::new());
            }
            classes[slot[root]].push(x);
        }
        classes
    }
}
