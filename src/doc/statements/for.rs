/*!
# `FOR <variable>=x TO y`
Where x and y are expressions.
## Purpose
Used with `NEXT` to repeat execution of statements
while counting up by one.

## Remarks
On the first iteration, x is assigned to the variable.
Statements execute until a `NEXT` statement, which adds 1
to the variable. If the result exceeds y the loop ends.
Otherwise the statements get executed again.

The first iteration always executes even if starting past the end.

## Example
```text
10 FOR I=3 TO 1
20 PRINT I
30 NEXT I
RUN
3
```

*/
