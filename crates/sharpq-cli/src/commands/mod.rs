pub mod dispatch;
pub mod enums;
pub mod files;
pub mod methods;
pub mod types;

#[cfg(test)]
pub(crate) mod fixture {
    use sharpq_query::SourceForest;

    const CLIENT_A: &str = r"
using System;

namespace App.Social
{
    [MyAttribute]
    public class ClientA : BaseClient, IDisposable
    {
        public ClientA(string name) { }

        public string GetFoo(int id, string name) { return name; }

        public static async Task<int> PushBar(params int[] values) { return 0; }

        private void Reset() { }

        public void Dispose() { }

        public enum Mode { Fast = 1, Slow }

        private class Cache { }
    }
}
";

    const FEED_CLIENT: &str = r#"
namespace App.Social.Sub;

internal sealed class FeedClient
{
    public string GetFeed() => "";
}

public interface IFeed
{
    string Next();
}
"#;

    const SHAPES: &str = r"
namespace App.Models
{
    public struct Point { public int X; }

    public record Person(string Name);

    public enum Status : byte { Active, Archived = 4 }
}
";

    pub(crate) fn forest() -> SourceForest {
        SourceForest::from_sources(
            "/repo",
            [
                ("Social/ClientA.cs", CLIENT_A),
                ("Social/Sub/FeedClient.cs", FEED_CLIENT),
                ("Models/Shapes.cs", SHAPES),
            ],
        )
    }
}
