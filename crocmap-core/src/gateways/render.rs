use crocmap_entities::map::MapDocument;

pub trait MapRenderer {
    fn render(&self, map: &MapDocument) -> anyhow::Result<String>;
}
